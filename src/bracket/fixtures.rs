//! Markup builders mirroring the Liquipedia bracket popup layout.

pub(crate) fn page(brackets: &[String]) -> String {
    format!(
        "<!DOCTYPE html><html><head><title>Bracket</title></head><body><div id=\"mw-content-text\">{}</div></body></html>",
        brackets.concat()
    )
}

pub(crate) fn bracket(matchups: &[String]) -> String {
    format!(
        "<div class=\"bracket-wrapper\"><div class=\"bracket-scroller\"><div class=\"bracket\">{}</div></div></div>",
        matchups.concat()
    )
}

pub(crate) fn team(id: &str) -> String {
    format!(
        "<span class=\"team-template-team-short\" data-highlightingclass=\"{id}\"><span class=\"team-template-text\"><a href=\"/valorant/{id}\" title=\"{id}\">{id}</a></span></span>"
    )
}

pub(crate) fn matchup(teams: &[&str], games: &[String]) -> String {
    let teams: String = teams.iter().map(|t| team(t)).collect();
    format!(
        "<div class=\"bracket-game\"><div class=\"bracket-popup-wrapper bracket-popup-team\" style=\"display:none\"><div class=\"bracket-popup\"><div class=\"bracket-popup-header\">{teams}</div><div class=\"bracket-popup-body\">{}</div></div></div></div>",
        games.concat()
    )
}

pub(crate) fn agent_panel(style: &str, agents: &[&str]) -> String {
    let picks: String = agents
        .iter()
        .map(|a| format!("<span title=\"{a}\"><img alt=\"\" src=\"/images/{a}.png\"></span>"))
        .collect();
    format!("<div style=\"{style}\">{picks}</div>")
}

fn container(left: &[&str], map: &str, right: &[&str]) -> String {
    format!(
        "<div class=\"bracket-popup-body-match-container\">{}{map}{}</div>",
        agent_panel("float:left;margin-right:10px", left),
        agent_panel("float:right;margin-left:10px", right),
    )
}

pub(crate) fn game(map: &str, left: &[&str], right: &[&str]) -> String {
    container(
        left,
        &format!(
            "<div class=\"bracket-popup-body-match-map\"><a href=\"/valorant/{map}\" title=\"{map}\">{map}</a></div>"
        ),
        right,
    )
}

pub(crate) fn game_without_map_title(left: &[&str], right: &[&str]) -> String {
    container(
        left,
        "<div class=\"bracket-popup-body-match-map\"><a href=\"/valorant/TBD\">TBD</a></div>",
        right,
    )
}

pub(crate) fn game_without_map(left: &[&str], right: &[&str]) -> String {
    container(left, "", right)
}

pub(crate) fn skipped_game() -> String {
    "<div class=\"bracket-popup-body-match-container\"><div class=\"bracket-popup-body-match-mapskip\">Map not played</div></div>".to_string()
}

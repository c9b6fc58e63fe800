use std::sync::LazyLock;

use regex::Regex;

static BOARD_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Za-z_]+").expect("board code pattern"));
static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<br\s*/?>").expect("line break pattern"));
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern"));

/// Extracts the board code from a boards panel line such as `g - Technology`:
/// the leading run of ASCII word characters, or `""` if there is none.
pub fn board_code(selection: &str) -> &str {
    BOARD_CODE
        .find(selection)
        .map_or("", |code| code.as_str())
}

/// Strips comment markup. Tags are removed before entities are decoded so an
/// escaped `&lt;` survives as a literal `<`.
pub fn remove_html(input: &str) -> Result<String, html_entities::DecodeError> {
    let with_breaks = LINE_BREAK.replace_all(input, "\n");
    let untagged = TAG.replace_all(&with_breaks, "");
    html_entities::decode_html_entities(&untagged)
}

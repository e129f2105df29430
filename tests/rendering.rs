//! Canonical rendering of tokens and diagnostics.

mod common;

use common::rendered;
use decaf_lex::scan;

// -----------------------------------------------------------
// Token lines.
// -----------------------------------------------------------

#[test]
fn classified_tokens_show_line_kind_lexeme() {
    assert_eq!(rendered("42"), ["1 INTLITERAL 42"]);
    assert_eq!(rendered("name"), ["1 IDENTIFIER name"]);
    assert_eq!(rendered("'c'"), ["1 CHARLITERAL 'c'"]);
    assert_eq!(rendered("\"s\""), ["1 STRINGLITERAL \"s\""]);
    assert_eq!(rendered("true"), ["1 BOOLEANLITERAL true"]);
}

#[test]
fn typeless_tokens_show_line_and_lexeme_only() {
    assert_eq!(rendered("class"), ["1 class"]);
    assert_eq!(rendered("=="), ["1 =="]);
    assert_eq!(rendered("%"), ["1 %"]);
    assert_eq!(rendered("\n\n;"), ["3 ;"]);
}

#[test]
fn escaped_lexemes_render_verbatim() {
    assert_eq!(rendered(r"'\n'"), [r"1 CHARLITERAL '\n'"]);
    assert_eq!(rendered(r#""a\tb""#), [r#"1 STRINGLITERAL "a\tb""#]);
}

// -----------------------------------------------------------
// Diagnostic lines, no expectation.
// -----------------------------------------------------------

#[test]
fn unexpected_plain_character() {
    assert_eq!(rendered("#"), ["test.dcf line 1:1: unexpected char: '#'"]);
}

#[test]
fn unexpected_tab_renders_hex() {
    assert_eq!(rendered("'\t"), ["test.dcf line 1:2: unexpected char: 0x9"]);
}

#[test]
fn unexpected_newline_renders_hex() {
    assert_eq!(rendered("'\n"), ["test.dcf line 1:2: unexpected char: 0xA"]);
}

#[test]
fn unexpected_form_feed_renders_hex() {
    assert_eq!(
        rendered("'\x0C"),
        ["test.dcf line 1:2: unexpected char: 0xC"]
    );
}

#[test]
fn unexpected_end_of_input() {
    assert_eq!(
        rendered("0x"),
        ["test.dcf line 1:3: unexpected char: end of input"]
    );
}

// -----------------------------------------------------------
// Diagnostic lines, with expectation.
// -----------------------------------------------------------

#[test]
fn expecting_quote_found_plain_character() {
    let lines = rendered("'ab");
    assert_eq!(lines[0], "test.dcf line 1:3: expecting ''', found 'b'");
}

#[test]
fn expecting_quote_found_tab() {
    let lines = rendered("'a\t");
    assert_eq!(lines[0], r"test.dcf line 1:3: expecting ''', found '\t'");
}

#[test]
fn expecting_quote_found_newline() {
    let lines = rendered("'a\n");
    assert_eq!(lines[0], r"test.dcf line 1:3: expecting ''', found '\n'");
}

#[test]
fn expecting_quote_found_form_feed() {
    let lines = rendered("'a\x0C");
    assert_eq!(lines[0], r"test.dcf line 1:3: expecting ''', found '\f'");
}

#[test]
fn expecting_quote_found_end_of_input() {
    assert_eq!(
        rendered("'a"),
        ["test.dcf line 1:3: expecting ''', found end of input"]
    );
}

#[test]
fn expecting_double_quote() {
    assert_eq!(
        rendered("\"abc"),
        ["test.dcf line 1:5: expecting '\"', found end of input"]
    );
}

// -----------------------------------------------------------
// Prefix details.
// -----------------------------------------------------------

#[test]
fn filename_prefixes_diagnostics_verbatim() {
    let output = scan("@", "dir/prog.dcf");
    assert_eq!(
        output[0].to_string(),
        "dir/prog.dcf line 1:1: unexpected char: '@'"
    );
}

#[test]
fn diagnostic_position_tracks_lines_and_columns() {
    assert_eq!(
        rendered("x\n  @"),
        ["1 IDENTIFIER x", "test.dcf line 2:3: unexpected char: '@'"]
    );
}

#[test]
fn mixed_line_renders_in_order() {
    assert_eq!(
        rendered("int x = 0x;"),
        [
            "1 int",
            "1 IDENTIFIER x",
            "1 =",
            "test.dcf line 1:11: unexpected char: ';'"
        ]
    );
}

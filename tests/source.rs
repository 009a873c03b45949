use latex_input::{load_map, save_map, Error, InputInfo, SourceMaps};
use std::env;
use std::fs;

#[test]
fn row_goes_to_both_maps() {
    let mut maps = SourceMaps::new();
    maps.push_row(&["U+1F600", "😀", "\\:grinning:", "GRINNING FACE"]).unwrap();
    maps.push_row(&["U+00B1", "±", "\\pm, \\plusminus", "PLUS-MINUS SIGN"]).unwrap();
    maps.push_row::<&str>(&[]).unwrap();

    assert_eq!(maps.latex.len(), 2);
    assert_eq!(maps.emoji.len(), 1);
    assert_eq!(
        maps.emoji["grinning"],
        InputInfo {
            code: "U+1F600".to_owned(),
            character: "😀".to_owned(),
            sequence: "grinning".to_owned(),
            name: "GRINNING FACE".to_owned(),
        },
    );
    assert_eq!(maps.latex["plusminus"].character, "±");
    assert_eq!(maps.latex["pm"].sequence, "pm");
}

#[test]
fn character_is_rebuilt_from_code() {
    let mut maps = SourceMaps::new();
    // the scraped cell lost the leading space of the combining sequence
    maps.push_row(&["U+0020 + U+0302", "\u{0302}", "\\hat", "COMBINING CIRCUMFLEX"]).unwrap();
    maps.push_row(&["U+0078  +  U+0302", "x\u{0302}", "\\xhat", "X WITH HAT"]).unwrap();
    let info = &maps.latex["hat"];
    assert_eq!(info.character, " \u{0302}");
    assert_eq!(info.code, "U+0020 + U+0302");
    assert_eq!(maps.latex["xhat"].code, "U+0078 + U+0302");
}

#[test]
fn malformed_rows() {
    let cases: &[&[&str]] = &[
        &["U+03B1", "α", "\\alpha"],
        &["03B1", "α", "\\alpha", "ALPHA"],
        &["U+03B1", "α", "alpha", "ALPHA"],
        &["U+03B1", "β", "\\alpha", "ALPHA"],
        &["U+03B1", "α", "\\alpha, \\", "ALPHA"],
        &["U+1F600", "😀", "\\:grinning", "GRINNING FACE"],
        &["U+1F600", "😀", "\\::", "GRINNING FACE"],
        &["U+1F600", "😀", "\\:grin:ning:", "GRINNING FACE"],
        &["U+03B1", "α", "\\al:pha", "ALPHA"],
        &["U+0061 + U+0062 + U+0063", "abc", "\\abc", "ABC"],
        &["U+1F1E6 + U+0302", "\u{1F1E6}\u{0302}", "\\flag", "FLAG"],
    ];
    for row in cases {
        let mut maps = SourceMaps::new();
        match maps.push_row(*row) {
            Err(Error::MalformedRow { row: echoed, .. }) => assert_eq!(echoed, row.join("\t")),
            other => panic!("{:?}: {:?}", row, other),
        }
    }
}

#[test]
fn parse_tab_separated_rows() {
    let text = "U+03B1\tα\t\\alpha\tGREEK SMALL LETTER ALPHA\n\
                \n\
                U+1F44D\t👍\t\\:+1:, \\:thumbsup:\tTHUMBS UP SIGN\n";
    let maps = SourceMaps::parse_rows(text).unwrap();
    assert_eq!(maps.latex.keys().collect::<Vec<_>>(), ["alpha"]);
    assert_eq!(maps.emoji.keys().collect::<Vec<_>>(), ["+1", "thumbsup"]);
}

#[test]
fn json_checkpoint() {
    let mut maps = SourceMaps::new();
    maps.push_row(&["U+03B1", "α", "\\alpha", "GREEK SMALL LETTER ALPHA"]).unwrap();
    maps.push_row(&["U+00B1", "±", "\\pm", "PLUS-MINUS SIGN"]).unwrap();

    let path = env::temp_dir().join(format!("latex_map_{}.json", std::process::id()));
    save_map(&path, &maps.latex).unwrap();
    let json = fs::read_to_string(&path).unwrap();
    assert!(json.contains("\n\t\"alpha\": {\n\t\t\"code\": \"U+03B1\",\n\t\t\"character\": \"α\","));
    let loaded = load_map(&path).unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(loaded, maps.latex);

    let missing = env::temp_dir().join("latex_input_missing.json");
    assert!(matches!(load_map(&missing), Err(Error::Io { .. })));
}

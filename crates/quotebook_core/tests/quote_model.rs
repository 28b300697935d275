use quotebook_core::Quote;

#[test]
fn with_id_sets_all_fields() {
    let quote = Quote::with_id(1, "작가명", "새로운 명언");

    assert_eq!(quote.id, 1);
    assert_eq!(quote.author, "작가명");
    assert_eq!(quote.content, "새로운 명언");
}

#[test]
fn info_renders_id_author_content() {
    let quote = Quote::with_id(3, "파울로 코엘료", "죽고자 하면 살리라");

    assert_eq!(quote.info(), "3 / 파울로 코엘료 / 죽고자 하면 살리라");
}

#[test]
fn update_replaces_fields_but_keeps_id() {
    let mut quote = Quote::with_id(7, "기존 작가", "기존 명언");

    quote.update("새로운 작가명", "새로운 명언 내용");

    assert_eq!(quote.id, 7);
    assert_eq!(quote.author, "새로운 작가명");
    assert_eq!(quote.content, "새로운 명언 내용");
    assert_eq!(quote.info(), "7 / 새로운 작가명 / 새로운 명언 내용");
}

#[test]
fn quote_serialization_uses_expected_wire_fields() {
    let quote = Quote::with_id(2, "author", "content");

    let json = serde_json::to_value(&quote).unwrap();
    assert_eq!(json["id"], 2);
    assert_eq!(json["author"], "author");
    assert_eq!(json["content"], "content");

    let decoded: Quote = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, quote);
}

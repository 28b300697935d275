use quotebook_core::db::open_db_in_memory;
use quotebook_core::{NewQuote, QuoteRepository, RepoError, SqliteQuoteRepository};
use rusqlite::Connection;

#[test]
fn insert_and_select_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let mut repo = SqliteQuoteRepository::try_new(&conn).unwrap();

    let id = repo.insert(NewQuote::new("작가명", "새로운 명언")).unwrap();
    assert_eq!(id, 1);

    let loaded = repo.select_by_id(id).unwrap().unwrap();
    assert_eq!(loaded.id, 1);
    assert_eq!(loaded.author, "작가명");
    assert_eq!(loaded.content, "새로운 명언");
}

#[test]
fn ids_are_sequential_and_never_reused_after_delete() {
    let conn = open_db_in_memory().unwrap();
    let mut repo = SqliteQuoteRepository::try_new(&conn).unwrap();

    let first = repo.insert(NewQuote::new("a1", "c1")).unwrap();
    let second = repo.insert(NewQuote::new("a2", "c2")).unwrap();
    repo.delete(second).unwrap();
    let third = repo.insert(NewQuote::new("a3", "c3")).unwrap();

    assert_eq!((first, second, third), (1, 2, 3));
}

#[test]
fn update_existing_quote_changes_only_fields() {
    let conn = open_db_in_memory().unwrap();
    let mut repo = SqliteQuoteRepository::try_new(&conn).unwrap();

    let id = repo.insert(NewQuote::new("기존 작가", "기존 명언")).unwrap();
    let mut quote = repo.select_by_id(id).unwrap().unwrap();

    quote.update("새로운 작가명", "새로운 명언 내용");
    repo.update(&quote).unwrap();

    let loaded = repo.select_by_id(id).unwrap().unwrap();
    assert_eq!(loaded.id, id);
    assert_eq!(loaded.author, "새로운 작가명");
    assert_eq!(loaded.content, "새로운 명언 내용");
}

#[test]
fn update_not_found_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let mut repo = SqliteQuoteRepository::try_new(&conn).unwrap();

    let ghost = quotebook_core::Quote::with_id(99, "없는 작가", "없는 명언");
    let err = repo.update(&ghost).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(99)));
}

#[test]
fn delete_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    let mut repo = SqliteQuoteRepository::try_new(&conn).unwrap();

    let id = repo.insert(NewQuote::new("작가명", "명언내용")).unwrap();
    repo.delete(id).unwrap();
    repo.delete(id).unwrap();

    assert_eq!(repo.select_by_id(id).unwrap(), None);
}

#[test]
fn select_all_returns_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let mut repo = SqliteQuoteRepository::try_new(&conn).unwrap();

    repo.insert(NewQuote::new("a1", "c1")).unwrap();
    repo.insert(NewQuote::new("a2", "c2")).unwrap();
    repo.insert(NewQuote::new("a3", "c3")).unwrap();

    let all = repo.select_all().unwrap();
    let ids: Vec<_> = all.iter().map(|quote| quote.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn search_matches_author_and_content_literally() {
    let conn = open_db_in_memory().unwrap();
    let mut repo = SqliteQuoteRepository::try_new(&conn).unwrap();

    repo.insert(NewQuote::new("이순신", "죽고자 하면 살리라")).unwrap();
    repo.insert(NewQuote::new("세종대왕", "백성을 위한 글자")).unwrap();
    repo.insert(NewQuote::new("통계학자", "100% 확신은 없다")).unwrap();

    let by_author = repo.search("이순신").unwrap();
    assert_eq!(by_author.len(), 1);
    assert_eq!(by_author[0].id, 1);

    let by_content = repo.search("글자").unwrap();
    assert_eq!(by_content.len(), 1);
    assert_eq!(by_content[0].id, 2);

    // `%` must match literally, not as a LIKE wildcard.
    let by_percent = repo.search("100%").unwrap();
    assert_eq!(by_percent.len(), 1);
    assert_eq!(by_percent[0].id, 3);

    assert!(repo.search("없는 검색어").unwrap().is_empty());
}

#[test]
fn try_new_rejects_unmigrated_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let err = SqliteQuoteRepository::try_new(&conn).unwrap_err();
    assert!(matches!(err, RepoError::MissingRequiredTable("quotes")));
}

use mockito::{Matcher, Server};
use scryfall::{ClientConfig, FetchError, ScryfallClient};

const DREADMAW: &str = r#"{
    "object": "card",
    "name": "Colossal Dreadmaw",
    "scryfall_uri": "https://scryfall.com/card/xln/180/colossal-dreadmaw",
    "mana_cost": "{4}{G}{G}",
    "type_line": "Creature — Dinosaur",
    "oracle_text": "Trample",
    "power": "6",
    "toughness": "6",
    "set": "xln"
}"#;

const NOT_FOUND: &str = r#"{
    "object": "error",
    "code": "not_found",
    "status": 404,
    "details": "No cards found matching the given name"
}"#;

fn client_for(server: &Server) -> ScryfallClient {
    let config = ClientConfig {
        base_uri: format!("{}/cards/", server.url()),
        ..ClientConfig::default()
    };
    ScryfallClient::new(&config).unwrap()
}

fn card_list(names: &[&str], has_more: bool, next_page: Option<String>) -> String {
    let data: Vec<serde_json::Value> = names
        .iter()
        .map(|name| serde_json::json!({ "name": name, "type_line": "Creature — Dinosaur", "set": "xln" }))
        .collect();
    serde_json::json!({
        "object": "list",
        "total_cards": 3,
        "has_more": has_more,
        "next_page": next_page,
        "data": data,
    })
    .to_string()
}

#[test]
fn search_exact_finds_card() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/cards/named")
        .match_query(Matcher::UrlEncoded("exact".into(), "Colossal Dreadmaw".into()))
        .match_header("user-agent", Matcher::Regex("^Nyxfall/".into()))
        .match_header("accept", "*/*")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(DREADMAW)
        .create();

    let card = client_for(&server)
        .search_exact("Colossal Dreadmaw")
        .unwrap()
        .expect("card should be found");
    mock.assert();

    assert_eq!(card.name(), "Colossal Dreadmaw");
    assert_eq!(card.set(), "XLN");
    assert_eq!(card.power_toughness(), Some(("6", "6")));
    assert_eq!(card.flavor_text(), None);
}

#[test]
fn search_exact_reports_unknown_card() {
    let mut server = Server::new();
    server
        .mock("GET", "/cards/named")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(NOT_FOUND)
        .create();

    let card = client_for(&server).search_exact("Colossal Dreadmow").unwrap();
    assert!(card.is_none());
}

#[test]
fn search_random_returns_card() {
    let mut server = Server::new();
    server
        .mock("GET", "/cards/random")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(DREADMAW)
        .create();

    let card = client_for(&server).search_random().unwrap();
    assert_eq!(card.name(), "Colossal Dreadmaw");
}

#[test]
fn search_query_follows_pages() {
    let mut server = Server::new();
    let next_page = format!("{}/cards/search?q=dinosaur&page=2", server.url());
    server
        .mock("GET", "/cards/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "dinosaur".into()),
            Matcher::UrlEncoded("page".into(), "1".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(card_list(&["Colossal Dreadmaw", "Ancient Brontodon"], true, Some(next_page)))
        .create();
    server
        .mock("GET", "/cards/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "dinosaur".into()),
            Matcher::UrlEncoded("page".into(), "2".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(card_list(&["Regisaur Alpha"], false, None))
        .create();

    let client = client_for(&server);
    let first = client.search_query("dinosaur").unwrap();
    assert_eq!(first.total_cards, 3);
    assert!(first.has_more);
    let names: Vec<&str> = first.data.iter().map(|card| card.name()).collect();
    assert_eq!(names, ["Colossal Dreadmaw", "Ancient Brontodon"]);

    let second = client.next_page(&first).unwrap().expect("there is a second page");
    assert!(!second.has_more);
    assert_eq!(second.data.len(), 1);
    assert_eq!(second.data[0].name(), "Regisaur Alpha");

    assert!(client.next_page(&second).unwrap().is_none());
}

#[test]
fn search_query_without_matches_is_empty() {
    let mut server = Server::new();
    server
        .mock("GET", "/cards/search")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(NOT_FOUND)
        .create();

    let page = client_for(&server).search_query("xyzzy").unwrap();
    assert!(page.data.is_empty());
    assert!(!page.has_more);
}

#[test]
fn server_errors_are_reported() {
    let mut server = Server::new();
    server
        .mock("GET", "/cards/random")
        .with_status(500)
        .with_body("Internal Server Error")
        .create();

    match client_for(&server).search_random() {
        Err(FetchError::Api { status, .. }) => assert_eq!(status, 500),
        other => panic!("Expected an API error, got {:?}", other),
    }
}

#[test]
fn malformed_body_is_a_decode_error() {
    let mut server = Server::new();
    server
        .mock("GET", "/cards/random")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{ "name": "Colossal Dreadmaw", "power": 6 "#)
        .create();

    match client_for(&server).search_random() {
        Err(err @ FetchError::Decode(_)) => {
            assert!(err.to_string().starts_with("Could not understand the Scryfall response"));
        }
        other => panic!("Expected a decode error, got {:?}", other),
    }
}

#[test]
fn unreachable_server_is_a_transport_error() {
    let config = ClientConfig {
        // Nothing listens on the discard port
        base_uri: String::from("http://127.0.0.1:9/cards/"),
        timeout_secs: 5,
        ..ClientConfig::default()
    };
    match ScryfallClient::new(&config).unwrap().search_random() {
        Err(err @ FetchError::Transport(_)) => {
            assert!(err.to_string().starts_with("Could not reach the Scryfall API"));
        }
        other => panic!("Expected a transport error, got {:?}", other),
    }
}

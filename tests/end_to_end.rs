use campus_helper::navigatum::SearchResult;
use campus_helper::{
    check_for_applicable_wizard, extract_room_number, wizard_name, Error, NavigatumClient,
    WIZARD_NAMES,
};
use mockito::Matcher;
use reqwest::Client;

const ROOMS_RESPONSE: &str = r#"{
    "sections": [
        {
            "facet": "sites_buildings",
            "entries": [{ "id": "5510", "name": "Maschinenwesen" }]
        },
        {
            "facet": "rooms",
            "entries": [
                { "id": "5510.02.101", "name": "Hörsaal" },
                { "id": "5510.02.102" }
            ]
        }
    ],
    "time_ms": 4
}"#;

#[tokio::test]
async fn room_message_is_resolved() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/search")
        .match_query(Matcher::UrlEncoded("q".into(), "5510.02.101".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ROOMS_RESPONSE)
        .expect(2)
        .create_async()
        .await;

    let navigatum = NavigatumClient::new(&server.url())?;
    let client = Client::new();
    let message = "Where is room 5510.02.101?";

    // 1. The room number is picked out of the message.
    assert_eq!(extract_room_number(message), Some("5510.02.101"));

    // 2. It resolves to the first room hit.
    let first = navigatum.find_room_id(&client, message).await?;
    assert_eq!(first.as_deref(), Some("5510.02.101"));

    // 3. Asking again gives the same answer.
    let second = navigatum.find_room_id(&client, message).await?;
    assert_eq!(first, second);

    // 4. The message is not a wizard trigger.
    assert_eq!(check_for_applicable_wizard(message), None);

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn buildings_only_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"sections":[{"facet":"sites_buildings","entries":[{"id":"5510"}]}]}"#)
        .create_async()
        .await;

    let navigatum = NavigatumClient::new(&server.url())?;
    let room = navigatum
        .find_room_id(&Client::new(), "Gebäude 5510.02.101")
        .await?;
    assert_eq!(room, None);
    Ok(())
}

#[tokio::test]
async fn transport_failure_is_not_not_found() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/search")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body("not found")
        .create_async()
        .await;

    let navigatum = NavigatumClient::new(&server.url()).unwrap();
    let result = navigatum.find_room_id(&Client::new(), "5510.02.101").await;
    let error = result.unwrap_err();
    assert!(matches!(error, Error::Dependency(_)));
    assert!(error.to_string().contains("404"));
}

#[test]
fn search_result_ignores_extra_fields() {
    let result: SearchResult = serde_json::from_str(ROOMS_RESPONSE).unwrap();
    assert_eq!(result.sections.len(), 2);
    assert_eq!(result.first_room_id(), Some("5510.02.101"));
}

#[test]
fn leave_wizard_is_selected() {
    let index =
        check_for_applicable_wizard("Ich möchte ein URLAUBssemester beantragen").unwrap();
    assert_eq!(wizard_name(index), Some("Beurlaubung"));
    assert_eq!(WIZARD_NAMES[index], "Beurlaubung");
}

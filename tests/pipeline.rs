//! End-to-end behavior of the search pipeline: submission, catalog reply,
//! view transition and what ends up in the render region.

use assert_matches::assert_matches;
use character_finder::app::{MOVIES_LOADING_MESSAGE, MOVIES_RETRY_MESSAGE};
use character_finder::catalog::{CatalogReply, CatalogRequest};
use character_finder::domain::{DetailFacet, FacetKind, FailureReason};
use character_finder::render::Tone;
use character_finder::ui::BodyView;
use character_finder::{
    handle_event, initialize, Action, AppState, Config, Event, SearchKind, ViewState,
};

const ANNA_ELSA_OLAF: &str = r#"{
    "info": {"count": 3, "totalPages": 1, "previousPage": null, "nextPage": null},
    "data": [
        {"_id": 1, "name": "Anna", "films": ["Frozen"], "tvShows": [], "videoGames": [],
         "imageUrl": "https://img/anna.png"},
        {"_id": 2, "name": "Elsa", "films": ["Frozen", "Frozen II"], "tvShows": [],
         "videoGames": ["Kingdom Hearts III"]},
        {"_id": 3, "name": "Olaf", "films": ["Frozen"], "tvShows": ["Once Upon a Snowman"],
         "videoGames": []}
    ]
}"#;

const EMPTY_PAGE: &str = r#"{"info": {"count": 0, "totalPages": 0}, "data": []}"#;

const MICKEY: &str = r#"{
    "info": {"count": 1},
    "data": {"_id": 4703, "name": "Mickey Mouse", "films": ["Fantasia"],
             "tvShows": ["Show A", "Show B"], "videoGames": []}
}"#;

fn app() -> AppState {
    initialize(&Config::default())
}

fn submit(state: &mut AppState, kind: SearchKind, term: &str) -> CatalogRequest {
    state.search_kind = kind;
    state.search_query = term.to_string();
    let (_, actions) = handle_event(state, &Event::Submit).unwrap();
    match actions.as_slice() {
        [Action::Fetch(request)] => request.clone(),
        other => panic!("expected a single fetch, got {other:?}"),
    }
}

fn deliver(
    state: &mut AppState,
    request: &CatalogRequest,
    reply: CatalogReply,
) -> (bool, Vec<Action>) {
    handle_event(
        state,
        &Event::CatalogReply {
            context: request.context_map(),
            reply,
        },
    )
    .unwrap()
}

fn card_names(state: &AppState) -> Vec<String> {
    state
        .region()
        .cards()
        .filter_map(|card| card.text("h5", 0).map(String::from))
        .collect()
}

fn episode_titles(state: &AppState) -> Vec<String> {
    state
        .region()
        .episodes()
        .filter_map(|episode| episode.text(".card-title", 0).map(String::from))
        .collect()
}

fn errors(state: &AppState) -> Vec<String> {
    state.region().notices(Tone::Error).map(String::from).collect()
}

/// Opens the detail of the first listed character and returns its movies lookup.
fn open_first(state: &mut AppState) -> CatalogRequest {
    let (render, actions) = handle_event(state, &Event::OpenSelected).unwrap();
    assert!(render);
    match actions.as_slice() {
        [Action::Fetch(request)] => request.clone(),
        other => panic!("expected a movies lookup, got {other:?}"),
    }
}

#[test]
fn name_search_lists_cards_in_catalog_order() {
    let mut state = app();
    let request = submit(&mut state, SearchKind::ByName, "a");
    assert_eq!(request.url.as_str(), "https://api.disneyapi.dev/character?name=a");

    let (render, actions) = deliver(&mut state, &request, CatalogReply::http(200, ANNA_ELSA_OLAF));
    assert!(render);
    assert!(actions.is_empty());
    assert_eq!(card_names(&state), ["Anna", "Elsa", "Olaf"]);
    assert!(errors(&state).is_empty());
}

#[test]
fn film_and_game_searches_use_their_own_parameter() {
    let mut state = app();

    let films = submit(&mut state, SearchKind::ByMovie, "Frozen");
    assert_eq!(films.url.query(), Some("films=Frozen"));
    deliver(&mut state, &films, CatalogReply::http(200, ANNA_ELSA_OLAF));
    assert_eq!(card_names(&state), ["Anna", "Elsa", "Olaf"]);

    let games = submit(&mut state, SearchKind::ByVideoGame, "Kingdom Hearts");
    assert_eq!(games.url.query(), Some("videoGames=Kingdom+Hearts"));
}

#[test]
fn empty_results_get_a_message_per_kind() {
    let cases = [
        (SearchKind::ByName, "Zzz", "No se encontraron personajes con ese nombre"),
        (SearchKind::ByMovie, "Frozen", "No se encontraron personajes para esa película"),
        (SearchKind::ByVideoGame, "Zzz", "No se encontraron personajes para ese videojuego"),
    ];

    for (kind, term, message) in cases {
        let mut state = app();
        let request = submit(&mut state, kind, term);
        deliver(&mut state, &request, CatalogReply::http(200, EMPTY_PAGE));

        assert_matches!(
            state.state(),
            ViewState::Error(failure) if failure.reason == FailureReason::EmptyResult
        );
        assert_eq!(errors(&state), [message]);
        assert_eq!(state.region().cards().count(), 0);
    }
}

#[test]
fn bad_status_shows_the_retry_message() {
    let mut state = app();
    let request = submit(&mut state, SearchKind::ByName, "Mickey");
    deliver(&mut state, &request, CatalogReply::http(500, "oops"));

    assert_matches!(
        state.state(),
        ViewState::Error(failure)
            if matches!(failure.reason, FailureReason::BadStatus { code: 500, .. })
    );
    assert_eq!(
        errors(&state),
        ["Hubo un error al buscar personajes. Por favor, intenta de nuevo"]
    );
}

#[test]
fn transport_failure_shows_the_retry_message() {
    let mut state = app();
    let request = submit(&mut state, SearchKind::ByVideoGame, "Epic Mickey");
    deliver(
        &mut state,
        &request,
        CatalogReply::TransportFailed {
            reason: "dns error".to_string(),
        },
    );

    assert_matches!(
        state.state(),
        ViewState::Error(failure) if failure.reason == FailureReason::NetworkError
    );
    assert_eq!(
        errors(&state),
        ["Hubo un error al buscar videojuegos. Por favor, intenta de nuevo."]
    );
}

#[test]
fn malformed_body_is_a_network_error() {
    let mut state = app();
    let request = submit(&mut state, SearchKind::ByMovie, "Frozen");
    deliver(&mut state, &request, CatalogReply::http(200, "<html>"));

    assert_matches!(
        state.state(),
        ViewState::Error(failure) if failure.reason == FailureReason::NetworkError
    );
}

#[test]
fn a_new_list_replaces_the_previous_one() {
    let mut state = app();
    let first = submit(&mut state, SearchKind::ByName, "a");
    deliver(&mut state, &first, CatalogReply::http(200, ANNA_ELSA_OLAF));

    let second = submit(&mut state, SearchKind::ByName, "Mickey");
    assert_eq!(card_names(&state), ["Anna", "Elsa", "Olaf"], "view waits for the reply");

    deliver(&mut state, &second, CatalogReply::http(200, MICKEY));
    assert_eq!(card_names(&state), ["Mickey Mouse"]);
}

#[test]
fn cards_and_errors_never_coexist() {
    let mut state = app();
    let first = submit(&mut state, SearchKind::ByName, "a");
    deliver(&mut state, &first, CatalogReply::http(200, ANNA_ELSA_OLAF));

    let second = submit(&mut state, SearchKind::ByName, "a");
    deliver(&mut state, &second, CatalogReply::http(404, ""));
    assert_eq!(state.region().cards().count(), 0);
    assert_eq!(errors(&state).len(), 1);

    let third = submit(&mut state, SearchKind::ByName, "a");
    deliver(&mut state, &third, CatalogReply::http(200, ANNA_ELSA_OLAF));
    assert!(errors(&state).is_empty());
    assert_eq!(state.region().cards().count(), 3);
}

#[test]
fn single_object_payload_lists_one_card() {
    let mut state = app();
    let request = submit(&mut state, SearchKind::ByName, "Mickey Mouse");
    deliver(&mut state, &request, CatalogReply::http(200, MICKEY));

    let card = state.region().cards().next().unwrap();
    assert_eq!(card.text("h5", 0), Some("Mickey Mouse"));
    assert_eq!(card.text("p", 0), Some("Películas: Fantasia"));
    assert_eq!(card.text("p", 1), Some("Series de TV: Show A, Show B"));
}

#[test]
fn opening_a_card_fetches_its_movies() {
    let mut state = app();
    let search = submit(&mut state, SearchKind::ByName, "Mickey");
    deliver(&mut state, &search, CatalogReply::http(200, MICKEY));

    let lookup = open_first(&mut state);
    assert_eq!(lookup.url.as_str(), "https://api.disneyapi.dev/character/4703");
    assert_matches!(
        state.state(),
        ViewState::DetailPending { character, facet: FacetKind::Movies } if character.id == 4703
    );
    assert_eq!(
        state.region().notices(Tone::Info).collect::<Vec<_>>(),
        [MOVIES_LOADING_MESSAGE]
    );

    let body = r#"{
        "data": {"_id": 4703, "name": "Mickey Mouse", "films": ["Fantasia", "Fun and Fancy Free"]}
    }"#;
    deliver(&mut state, &lookup, CatalogReply::http(200, body));

    assert_matches!(
        state.state(),
        ViewState::Detail { facet: DetailFacet::Movies(titles), .. } if titles.len() == 2
    );
    assert_eq!(
        episode_titles(&state),
        ["Película: Fantasia", "Película: Fun and Fancy Free"]
    );
    assert_eq!(state.region().cards().count(), 0);
}

#[test]
fn movies_button_on_a_card_opens_the_same_detail() {
    let mut state = app();
    let search = submit(&mut state, SearchKind::ByName, "a");
    deliver(&mut state, &search, CatalogReply::http(200, ANNA_ELSA_OLAF));

    handle_event(&mut state, &Event::KeyDown).unwrap();
    let (_, actions) = handle_event(&mut state, &Event::PressMovies).unwrap();

    assert_matches!(
        actions.as_slice(),
        [Action::Fetch(request)] if request.url.path() == "/character/2"
    );
    assert_eq!(state.state().detail_character().map(|c| c.name.as_str()), Some("Elsa"));
}

#[test]
fn series_render_from_the_character_without_fetching() {
    let mut state = app();
    let search = submit(&mut state, SearchKind::ByName, "Mickey");
    deliver(&mut state, &search, CatalogReply::http(200, MICKEY));
    open_first(&mut state);

    let (render, actions) = handle_event(&mut state, &Event::PressSeries).unwrap();
    assert!(render);
    assert!(actions.is_empty());
    assert_eq!(
        episode_titles(&state),
        ["Serie de TV: Show A", "Serie de TV: Show B"]
    );
    assert_eq!(state.region().notices(Tone::Info).count(), 0);
}

#[test]
fn series_without_titles_show_a_notice() {
    let mut state = app();
    let search = submit(&mut state, SearchKind::ByName, "a");
    deliver(&mut state, &search, CatalogReply::http(200, ANNA_ELSA_OLAF));
    open_first(&mut state);
    handle_event(&mut state, &Event::PressSeries).unwrap();

    assert!(episode_titles(&state).is_empty());
    let viewmodel = state.compute_viewmodel(24, 80);
    let BodyView::Detail(detail) = viewmodel.body else {
        panic!("expected a detail view");
    };
    assert_eq!(
        detail.notice.map(|notice| notice.text).as_deref(),
        Some("No hay títulos para mostrar")
    );
}

#[test]
fn failed_movies_lookup_is_a_render_error() {
    let mut state = app();
    let search = submit(&mut state, SearchKind::ByName, "Mickey");
    deliver(&mut state, &search, CatalogReply::http(200, MICKEY));
    let lookup = open_first(&mut state);

    deliver(&mut state, &lookup, CatalogReply::http(503, ""));

    assert_matches!(
        state.state(),
        ViewState::Error(failure) if failure.reason == FailureReason::RenderError
    );
    assert_eq!(errors(&state), [MOVIES_RETRY_MESSAGE]);
}

#[test]
fn last_reply_wins_by_default() {
    let mut state = app();
    let older = submit(&mut state, SearchKind::ByName, "a");
    let newer = submit(&mut state, SearchKind::ByName, "Mickey");

    deliver(&mut state, &newer, CatalogReply::http(200, MICKEY));
    let (render, _) = deliver(&mut state, &older, CatalogReply::http(200, ANNA_ELSA_OLAF));

    assert!(render);
    assert_eq!(card_names(&state), ["Anna", "Elsa", "Olaf"]);
}

#[test]
fn stale_replies_are_dropped_when_configured() {
    let mut state = app();
    state.discard_stale_responses = true;
    let older = submit(&mut state, SearchKind::ByName, "a");
    let newer = submit(&mut state, SearchKind::ByName, "Mickey");

    deliver(&mut state, &newer, CatalogReply::http(200, MICKEY));
    let (render, _) = deliver(&mut state, &older, CatalogReply::http(200, ANNA_ELSA_OLAF));

    assert!(!render);
    assert_eq!(card_names(&state), ["Mickey Mouse"]);
}

#[test]
fn late_movies_reply_after_switching_to_series() {
    let body = r#"{"data": {"_id": 4703, "name": "Mickey Mouse", "films": ["Fantasia"]}}"#;

    // Default: the late lookup still lands on the same character's detail.
    let mut state = app();
    let search = submit(&mut state, SearchKind::ByName, "Mickey");
    deliver(&mut state, &search, CatalogReply::http(200, MICKEY));
    let lookup = open_first(&mut state);
    handle_event(&mut state, &Event::PressSeries).unwrap();
    deliver(&mut state, &lookup, CatalogReply::http(200, body));
    assert_eq!(episode_titles(&state), ["Película: Fantasia"]);

    // Discarding: the series view stays.
    let mut state = app();
    state.discard_stale_responses = true;
    let search = submit(&mut state, SearchKind::ByName, "Mickey");
    deliver(&mut state, &search, CatalogReply::http(200, MICKEY));
    let lookup = open_first(&mut state);
    handle_event(&mut state, &Event::PressSeries).unwrap();
    let (render, _) = deliver(&mut state, &lookup, CatalogReply::http(200, body));
    assert!(!render);
    assert_eq!(episode_titles(&state), ["Serie de TV: Show A", "Serie de TV: Show B"]);
}

#[test]
fn movies_reply_for_a_character_no_longer_shown_is_ignored() {
    let mut state = app();
    let search = submit(&mut state, SearchKind::ByName, "Mickey");
    deliver(&mut state, &search, CatalogReply::http(200, MICKEY));
    let lookup = open_first(&mut state);

    let next = submit(&mut state, SearchKind::ByName, "a");
    deliver(&mut state, &next, CatalogReply::http(200, ANNA_ELSA_OLAF));

    let (render, _) = deliver(&mut state, &lookup, CatalogReply::http(200, MICKEY));
    assert!(!render);
    assert_eq!(card_names(&state), ["Anna", "Elsa", "Olaf"]);
}

#[test]
fn viewmodel_reads_cards_from_the_region() {
    let mut state = app();
    let request = submit(&mut state, SearchKind::ByName, "a");
    deliver(&mut state, &request, CatalogReply::http(200, ANNA_ELSA_OLAF));
    handle_event(&mut state, &Event::KeyDown).unwrap();

    let viewmodel = state.compute_viewmodel(40, 120);
    assert_eq!(viewmodel.header.title, " Personajes (3) ");
    assert_matches!(viewmodel.body, BodyView::Cards(cards) => {
        let titles: Vec<_> = cards.iter().map(|card| card.title.as_str()).collect();
        assert_eq!(titles, ["Anna", "Elsa", "Olaf"]);
        assert!(cards[1].is_selected);
        assert_eq!(cards[0].image, "https://img/anna.png");
    });
}

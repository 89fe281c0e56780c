//! Shared test infrastructure for presentation and HTTP tests.
//!
//! - `deck(n)` - a small content-only deck with slide ids 1..=n
//! - `FakeDisplay` / `FakeTimer` / `FakeShell` - recording adapters for `Controller`
//! - `test_app()` - the full route table over the built-in deck

#![allow(dead_code)]

use std::time::Duration;

use actix_web::{
    App, Error, web,
    body::BoxBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
};

use ramaera::config::AppConfig;
use ramaera::handlers;
use ramaera::models::shareholder::{NewApplication, ShareholderStore};
use ramaera::models::slide::Deck;
use ramaera::presentation::{
    Controller, FullScreen, FullScreenError, FullScreenRequest, Notice, Shell, Ticker,
};

// ============================================================================
// DECKS
// ============================================================================

/// A deck of `n` content slides titled "Slide 1".."Slide n".
pub fn deck(n: u32) -> Deck {
    let slides: Vec<serde_json::Value> = (1..=n)
        .map(|id| {
            serde_json::json!({
                "id": id,
                "title": format!("Slide {id}"),
                "content": [format!("✅ point {id}")],
                "sourcePage": "Test",
                "type": "content",
            })
        })
        .collect();
    Deck::from_json(&serde_json::Value::Array(slides).to_string()).expect("valid test deck")
}

pub fn builtin_deck() -> Deck {
    Deck::builtin().expect("built-in deck is valid")
}

// ============================================================================
// FAKE ADAPTERS
// ============================================================================

#[derive(Debug, Default)]
pub struct FakeDisplay {
    pub requests: Vec<FullScreenRequest>,
    pub refuse_with: Option<FullScreenError>,
}

impl FullScreen for FakeDisplay {
    fn request_enter(&mut self) -> Result<(), FullScreenError> {
        self.requests.push(FullScreenRequest::Enter);
        self.refuse_with.clone().map_or(Ok(()), Err)
    }

    fn request_exit(&mut self) -> Result<(), FullScreenError> {
        self.requests.push(FullScreenRequest::Exit);
        self.refuse_with.clone().map_or(Ok(()), Err)
    }
}

/// Records the running generation instead of spawning a timer.
#[derive(Debug, Default)]
pub struct FakeTimer {
    pub running: Option<u64>,
    pub starts: usize,
    pub cancels: usize,
}

impl Ticker for FakeTimer {
    fn start(&mut self, _period: Duration, generation: u64) {
        self.running = Some(generation);
        self.starts += 1;
    }

    fn cancel(&mut self) {
        self.running = None;
        self.cancels += 1;
    }
}

#[derive(Debug, Default)]
pub struct FakeShell {
    pub routes: Vec<String>,
    pub notices: Vec<Notice>,
}

impl Shell for FakeShell {
    fn navigate(&mut self, route: &str) {
        self.routes.push(route.to_string());
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

pub type TestController = Controller<FakeDisplay, FakeTimer, FakeShell>;

pub fn controller(deck: Deck) -> TestController {
    Controller::new(
        deck,
        Duration::from_secs(5),
        FakeDisplay::default(),
        FakeTimer::default(),
        FakeShell::default(),
    )
}

/// Controller whose display refuses every request.
pub fn refusing_controller(deck: Deck, error: FullScreenError) -> TestController {
    let display = FakeDisplay { refuse_with: Some(error), ..FakeDisplay::default() };
    Controller::new(deck, Duration::from_secs(5), display, FakeTimer::default(), FakeShell::default())
}

// ============================================================================
// HTTP
// ============================================================================

/// All routes over the built-in deck and a fresh store.
pub fn test_app(
    store: ShareholderStore,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<BoxBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(AppConfig::default()))
        .app_data(web::Data::new(builtin_deck()))
        .app_data(web::Data::new(store))
        .configure(handlers::configure)
        .default_service(web::to(handlers::site_handlers::not_found))
}

/// An application that passes every validation rule.
pub fn valid_application() -> NewApplication {
    NewApplication {
        full_name: "Asha Verma".to_string(),
        email: "Asha@Example.com".to_string(),
        mobile: "9876543210".to_string(),
        location: "Patna".to_string(),
        referral_code: Some("RAM123".to_string()),
        pan_number: "ABCDE1234F".to_string(),
        nominee_name: "Ravi Verma".to_string(),
        nominee_relation: "Brother".to_string(),
        id_proof_url: "https://example.com/id.jpg".to_string(),
        share_purchase: 2,
        terms_agreed: true,
    }
}

/// `valid_application()` as the JSON body the site's form posts.
pub fn application_json() -> serde_json::Value {
    serde_json::json!({
        "fullName": "Asha Verma",
        "email": "Asha@Example.com",
        "mobile": "9876543210",
        "location": "Patna",
        "referralCode": "RAM123",
        "panNumber": "ABCDE1234F",
        "nomineeName": "Ravi Verma",
        "nomineeRelation": "Brother",
        "idProofUrl": "https://example.com/id.jpg",
        "sharePurchase": 2,
        "termsAgreed": true
    })
}

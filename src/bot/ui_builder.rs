//! Reply texts and the mini-app keyboard attached to every reply

use reqwest::Url;
use teloxide::types::{ButtonRequest, KeyboardButton, KeyboardMarkup, WebAppInfo};

use super::router::Route;

/// Label of the mini-app button; tapping it also sends this exact text back
pub const OPEN_APP_BUTTON_LABEL: &str = "Открыть CashRocket";

/// Reply to `/start`
pub const WELCOME_TEXT: &str =
    "Добро пожаловать в CashRocket. Нажмите кнопку ниже, чтобы открыть мини-приложение.";

/// Reply to the button press
pub const OPENING_APP_TEXT: &str = "Открываю мини-приложение.";

/// One outbound message: text plus the keyboard attached to it
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: &'static str,
    pub keyboard: KeyboardMarkup,
}

/// Create the reply keyboard with the single mini-app button
pub fn build_main_keyboard(webapp_url: &Url) -> KeyboardMarkup {
    let open_app = KeyboardButton::new(OPEN_APP_BUTTON_LABEL).request(ButtonRequest::WebApp(
        WebAppInfo {
            url: webapp_url.clone(),
        },
    ));

    KeyboardMarkup::new(vec![vec![open_app]]).resize_keyboard()
}

/// Build the reply sent for a matched route
pub fn build_reply(route: Route, webapp_url: &Url) -> Reply {
    let text = match route {
        Route::Start => WELCOME_TEXT,
        Route::OpenWebApp => OPENING_APP_TEXT,
    };

    Reply {
        text,
        keyboard: build_main_keyboard(webapp_url),
    }
}

use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, warn};

mod config;
mod hooks;
mod i18n;
mod motion;
mod reveal;
mod components {
    pub mod contact_form;
    pub mod nav;
}
mod pages {
    pub mod landing;
}

use i18n::Locale;
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/:locale")]
    Localized { locale: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Locale for a path segment, falling back to the default for anything unknown.
fn resolve_locale(segment: &str) -> Locale {
    match segment.parse::<Locale>() {
        Ok(locale) => locale,
        Err(err) => {
            warn!("{}, using {}", err, config::DEFAULT_LOCALE);
            config::DEFAULT_LOCALE
        }
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page ({})", config::DEFAULT_LOCALE);
            html! { <Landing locale={config::DEFAULT_LOCALE} /> }
        },
        Route::Localized { locale } => {
            let locale = resolve_locale(&locale);
            info!("Rendering landing page ({})", locale);
            html! { <Landing {locale} /> }
        },
        Route::NotFound => {
            warn!("Unknown route, rendering default landing page");
            html! { <Landing locale={config::DEFAULT_LOCALE} /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_segments_pick_their_locale() {
        assert_eq!(resolve_locale("pt"), Locale::Pt);
        assert_eq!(resolve_locale("en"), Locale::En);
        assert_eq!(resolve_locale("pt-BR"), Locale::Pt);
    }

    #[test]
    fn unknown_segments_fall_back_to_default() {
        assert_eq!(resolve_locale("de"), config::DEFAULT_LOCALE);
        assert_eq!(resolve_locale(""), config::DEFAULT_LOCALE);
    }

    #[test]
    fn locale_routes_use_the_tag() {
        for locale in Locale::ALL {
            let route = Route::Localized { locale: locale.tag().to_string() };
            assert_eq!(route.to_path(), format!("/{}", locale.tag()));
        }
    }
}

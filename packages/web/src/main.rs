use dioxus::prelude::*;

use store::ConsoleConfig;
use ui::{AuthProvider, NotificationProvider};
use views::{
    AppLayout, Dashboard, Exams, Grading, Login, NotFound, Register, Submissions, Unauthorized,
    Violations,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Dashboard {},
        #[route("/exams?:semester&:subject")]
        Exams { semester: String, subject: String },
        #[route("/submissions?:exam")]
        Submissions { exam: String },
        #[route("/grading")]
        Grading {},
        #[route("/violations")]
        Violations {},
    #[end_layout]
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/unauthorized")]
    Unauthorized {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONSOLE_TOML: &str = include_str!("../console.toml");

fn main() {
    let config = load_config();
    let level = config
        .app
        .log_level
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::INFO);
    if let Err(e) = dioxus::logger::init(level) {
        eprintln!("Failed to initialise logging: {e}");
    }
    tracing::info!(gateway = %config.api.gateway_url, "Starting {}", config.app.name);

    dioxus::launch(App);
}

/// The embedded `console.toml` with build-time overrides applied.
fn load_config() -> ConsoleConfig {
    let config = ConsoleConfig::from_toml(CONSOLE_TOML).unwrap_or_else(|e| {
        eprintln!("Invalid {}: {e}, using defaults", ConsoleConfig::filename());
        ConsoleConfig::default()
    });
    config.apply_overrides(build_time_env)
}

fn build_time_env(name: &str) -> Option<String> {
    let value = match name {
        "EXAM_CONSOLE_API_GATEWAY_URL" => option_env!("EXAM_CONSOLE_API_GATEWAY_URL"),
        "EXAM_CONSOLE_IAM_PATH" => option_env!("EXAM_CONSOLE_IAM_PATH"),
        "EXAM_CONSOLE_COURSE_PATH" => option_env!("EXAM_CONSOLE_COURSE_PATH"),
        "EXAM_CONSOLE_TIMEOUT_MS" => option_env!("EXAM_CONSOLE_TIMEOUT_MS"),
        "EXAM_CONSOLE_TOKEN_KEY" => option_env!("EXAM_CONSOLE_TOKEN_KEY"),
        "EXAM_CONSOLE_REFRESH_TOKEN_KEY" => option_env!("EXAM_CONSOLE_REFRESH_TOKEN_KEY"),
        "EXAM_CONSOLE_LOG_LEVEL" => option_env!("EXAM_CONSOLE_LOG_LEVEL"),
        _ => None,
    };
    value.map(str::to_string)
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        document::Stylesheet { href: ui::CONSOLE_CSS }
        document::Stylesheet { href: MAIN_CSS }

        NotificationProvider {
            AuthProvider {
                config: config,
                Router::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_matches_defaults() {
        let config = ConsoleConfig::from_toml(CONSOLE_TOML).unwrap();
        assert_eq!(config, ConsoleConfig::default());
        assert_eq!(build_time_env("EXAM_CONSOLE_UNKNOWN"), None);
    }

    #[test]
    fn test_routes_parse() {
        assert_eq!("/".parse::<Route>().ok(), Some(Route::Dashboard {}));
        assert_eq!("/grading".parse::<Route>().ok(), Some(Route::Grading {}));
        assert!(matches!(
            "/nowhere/else".parse::<Route>(),
            Ok(Route::NotFound { .. })
        ));
    }
}

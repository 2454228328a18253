//! Application root.
//!
//! Resolves the API configuration once, on first render, then mounts the
//! certificate form with it. The host serves `/config.json`; when the app is
//! served some other way (e.g. `trunk serve`) the request fails and the
//! compiled-in default is used instead.

use common::config::ApiConfig;
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::{html, Component, Context, Html};

use crate::components::certificate::CertificateFormComponent;

/// Runtime configuration document served next to `index.html`.
const CONFIG_PATH: &str = "/config.json";

pub enum Msg {
    ConfigResolved(ApiConfig),
}

pub struct App {
    config: Option<ApiConfig>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self { config: None }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ConfigResolved(config) => {
                gloo_console::log!("Using student API at", config.base_url());
                self.config = Some(config);
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        match &self.config {
            Some(config) => html! {
                <div>
                    <CertificateFormComponent config={config.clone()} />
                </div>
            },
            None => html! { <div class="loading">{"Loading…"}</div> },
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }

        let link = ctx.link().clone();
        spawn_local(async move {
            let response = Request::get(CONFIG_PATH).send().await;
            let config = match response {
                Ok(resp) if resp.ok() => match resp.json::<ApiConfig>().await {
                    Ok(config) => config,
                    Err(err) => {
                        gloo_console::warn!("Malformed", CONFIG_PATH, err.to_string());
                        fallback_config()
                    }
                },
                _ => fallback_config(),
            };
            link.send_message(Msg::ConfigResolved(config));
        });
    }
}

/// Build-time override via `CERT_DESK_API_BASE`, else the public deployment.
fn fallback_config() -> ApiConfig {
    option_env!("CERT_DESK_API_BASE")
        .map(ApiConfig::new)
        .unwrap_or_default()
}

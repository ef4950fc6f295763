//! App shell: contexts, session bootstrap and routing.

use crate::app::api::ServicesCtx;
use crate::core::config::UiConfig;
use crate::core::store::{
    AppStore, SessionStatus, app_dispatch, apply_session, begin_session_load, session_failed,
    sign_out,
};
use crate::features::profile::view::ProfilePage;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::telemetry::{LoggingConfig, init_logging};
use gloo::console;
use preferences::{load_access_token, load_config, load_locale};
use routes::Route;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

pub(crate) mod api;
mod preferences;
pub(crate) mod routes;

#[derive(Properties, PartialEq)]
pub(crate) struct AppProps {
    pub config: Rc<UiConfig>,
}

#[function_component(ReelboxApp)]
pub(crate) fn reelbox_app(props: &AppProps) -> Html {
    let locale = use_state(load_locale);
    let bundle = {
        let locale = *locale;
        use_memo(move |_| TranslationBundle::new(locale), locale)
    };
    let services = {
        let config = Rc::clone(&props.config);
        use_memo(
            move |_| ServicesCtx::new(&config),
            props.config.api_base_url.clone(),
        )
    };

    let status = use_selector(|store: &AppStore| store.session.status.clone());
    let identity = use_selector(|store: &AppStore| store.session.identity.clone());
    let profile = use_selector(|store: &AppStore| store.session.profile.clone());

    {
        let client = Rc::clone(&services.client);
        use_effect_with_deps(
            move |_| {
                let dispatch = app_dispatch();
                match load_access_token() {
                    None => dispatch.reduce_mut(sign_out),
                    Some(token) => {
                        dispatch.reduce_mut(begin_session_load);
                        yew::platform::spawn_local(async move {
                            match client.fetch_session(&token).await {
                                Ok(response) => dispatch
                                    .reduce_mut(move |store| apply_session(store, response, token)),
                                Err(err) => {
                                    tracing::warn!(error = %err, "session bootstrap failed");
                                    let message = err.to_string();
                                    dispatch
                                        .reduce_mut(move |store| session_failed(store, message));
                                }
                            }
                        });
                    }
                }
                || ()
            },
            (),
        );
    }

    let render_route = {
        let bundle = (*bundle).clone();
        let status = (*status).clone();
        let identity = (*identity).clone();
        let profile = (*profile).clone();
        move |route: Route| match route {
            Route::Profile => match (&status, identity.as_ref()) {
                (SessionStatus::Ready, Some(identity)) => html! {
                    <ProfilePage identity={identity.clone()} profile={profile.clone()} />
                },
                (SessionStatus::SignedOut, _) => html! {
                    <Placeholder body={bundle.text("app.signed_out", "Sign in to view your profile.")} />
                },
                (SessionStatus::Failed(message), _) => html! {
                    <Placeholder
                        title={bundle.text("app.load_failed", "Your profile could not be loaded.")}
                        body={message.clone()} />
                },
                _ => html! {
                    <Placeholder body={bundle.text("app.loading", "Loading your profile…")} />
                },
            },
            Route::ChangeEmail => html! {
                <ContactPlaceholder
                    title={bundle.text("contact.email_title", "Change email")}
                    current={identity.as_ref().map(|id| id.email.clone()).unwrap_or_default()} />
            },
            Route::ChangePhoneNumber => html! {
                <ContactPlaceholder
                    title={bundle.text("contact.phone_title", "Change phone number")}
                    current={identity.as_ref().map(|id| id.phone_number.clone()).unwrap_or_default()} />
            },
            Route::NotFound => html! {
                <Placeholder body={bundle.text("app.not_found", "Page not found.")} />
            },
        }
    };

    html! {
        <ContextProvider<ServicesCtx> context={(*services).clone()}>
            <ContextProvider<Rc<UiConfig>> context={Rc::clone(&props.config)}>
                <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
                    <BrowserRouter>
                        <main class="min-h-screen bg-base-200">
                            <Switch<Route> render={render_route} />
                        </main>
                    </BrowserRouter>
                </ContextProvider<TranslationBundle>>
            </ContextProvider<Rc<UiConfig>>>
        </ContextProvider<ServicesCtx>>
    }
}

#[derive(Properties, PartialEq)]
struct PlaceholderProps {
    #[prop_or_default]
    title: Option<String>,
    body: String,
}

#[function_component(Placeholder)]
fn placeholder(props: &PlaceholderProps) -> Html {
    html! {
        <div class="hero min-h-[50vh]">
            <div class="hero-content text-center">
                <div>
                    {props.title.as_ref().map(|title| html! {
                        <h1 class="text-2xl font-bold">{title.clone()}</h1>
                    })}
                    <p class="py-4">{props.body.clone()}</p>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ContactPlaceholderProps {
    title: String,
    current: String,
}

/// Destination for the contact edit buttons; the edit forms live elsewhere.
#[function_component(ContactPlaceholder)]
fn contact_placeholder(props: &ContactPlaceholderProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    html! {
        <div class="card bg-base-100 m-6 shadow">
            <div class="card-body">
                <h2 class="card-title">{props.title.clone()}</h2>
                <p class="text-sm opacity-70">{bundle.text("contact.current", "Current value")}</p>
                <p>{props.current.clone()}</p>
                <div class="card-actions">
                    <Link<Route> to={Route::Profile} classes="btn btn-ghost">
                        {bundle.text("app.back_to_profile", "Back to profile")}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let config = Rc::new(load_config());
    if let Err(err) = init_logging(&LoggingConfig::from(config.as_ref())) {
        console::error!(err.to_string());
    }
    let props = AppProps { config };
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<ReelboxApp>::with_root_and_props(root, props).render();
    } else {
        yew::Renderer::<ReelboxApp>::with_props(props).render();
    }
}

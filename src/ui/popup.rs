/// Popup UI: the event form

use std::cell::RefCell;
use std::rc::Rc;

use patternfly_yew::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::post_event;
use crate::category::Category;
use crate::config::Config;
use crate::controller::{FormController, NoticeKind};
use crate::storage::LocalStorage;
use crate::ui::components::{CategorySelect, ContentArea, LabeledInput, Loader};

type Controller = Rc<RefCell<FormController<LocalStorage>>>;

/// How long a notice stays up
const NOTICE_TIMEOUT_MS: i32 = 4000;

#[function_component(App)]
pub fn app() -> Html {
    let controller: Controller = use_mut_ref(|| FormController::load(LocalStorage::open()));
    let config = use_memo((), |_| Config::load());
    let refresh = use_force_update();

    // Report a broken endpoint once, on mount
    {
        let config = config.clone();
        use_effect_with((), move |_| {
            if let Err(e) = &*config {
                log::error!("{}", e);
            }
            || ()
        });
    }

    let on_project_id = edit_handler(&controller, &refresh, |c, value: String| c.set_project_id(value));
    let on_api_key = edit_handler(&controller, &refresh, |c, value: String| c.set_api_key(value));
    let on_username = edit_handler(&controller, &refresh, |c, value: String| c.set_username(value));
    let on_category = edit_handler(&controller, &refresh, |c, value: Option<Category>| c.set_category(value));
    let on_content = edit_handler(&controller, &refresh, |c, value: String| c.set_content(value));
    let on_dismiss = edit_handler(&controller, &refresh, |c, _: MouseEvent| c.dismiss_notice());

    // Create event handler
    let on_submit = {
        let controller = controller.clone();
        let refresh = refresh.clone();
        let config = config.clone();

        Callback::from(move |_: MouseEvent| {
            let endpoint = match &*config {
                Ok(config) => config.endpoint.clone(),
                Err(_) => return,
            };

            let started = controller.borrow_mut().begin_submit();
            refresh.force_update();
            let Ok(payload) = started else {
                return;
            };

            let controller = controller.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                let outcome = post_event(&endpoint, &payload).await;
                controller.borrow_mut().finish_submit(outcome);
                refresh.force_update();
            });
        })
    };

    let form = controller.borrow();
    let session = form.session().clone();
    let draft = form.draft().clone();
    let submitting = form.is_submitting();
    let notice = form.notice().cloned();
    let notice_seq = form.notice_seq();
    drop(form);

    // Expire each notice after a while, like a toast
    {
        let controller = controller.clone();
        let refresh = refresh.clone();
        use_effect_with(notice_seq, move |seq| {
            let seq = *seq;
            let timer = Timeout::start(NOTICE_TIMEOUT_MS, move || {
                controller.borrow_mut().expire_notice(seq);
                refresh.force_update();
            });
            move || drop(timer)
        });
    }

    let config_error = (*config).as_ref().err().map(|e| e.to_string());

    html! {
        <main class="popup">
            <h1 class="popup-title">{"Timeline amikua"}</h1>

            <div>
                <LabeledInput label="Project ID" value={session.project_id} onchange={on_project_id} />
                <LabeledInput label="API Key" value={session.api_key} onchange={on_api_key} />
                <LabeledInput label="Username" value={session.username} onchange={on_username} />
            </div>

            <CategorySelect selected={draft.category} onchange={on_category} />
            <ContentArea value={draft.content} onchange={on_content} />

            <Button
                onclick={on_submit}
                disabled={submitting || config_error.is_some()}
                variant={ButtonVariant::Primary}
                block={true}
            >
                if submitting {
                    <Loader />
                } else {
                    {"Create Event"}
                }
            </Button>

            // Toast region
            <div class="toast-region">
                if let Some(err) = config_error {
                    <Alert r#type={AlertType::Danger} title={"Misconfigured endpoint"} inline={true}>
                        {err}
                    </Alert>
                }
                if let Some(notice) = notice {
                    <Alert
                        r#type={match notice.kind {
                            NoticeKind::Success => AlertType::Success,
                            NoticeKind::Error => AlertType::Danger,
                        }}
                        title={notice.message}
                        inline={true}
                    >
                        <Button onclick={on_dismiss} variant={ButtonVariant::Secondary}>
                            {"Dismiss"}
                        </Button>
                    </Alert>
                }
            </div>
        </main>
    }
}

// Apply one edit to the controller, then re-render
fn edit_handler<T: 'static>(
    controller: &Controller,
    refresh: &UseForceUpdateHandle,
    apply: fn(&mut FormController<LocalStorage>, T),
) -> Callback<T> {
    let controller = controller.clone();
    let refresh = refresh.clone();
    Callback::from(move |value: T| {
        apply(&mut *controller.borrow_mut(), value);
        refresh.force_update();
    })
}

/// A `setTimeout` that is cancelled when dropped
struct Timeout {
    handle: Option<i32>,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    fn start(millis: i32, callback: impl FnMut() + 'static) -> Timeout {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        let handle = web_sys::window().and_then(|window| {
            window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    callback.as_ref().unchecked_ref::<js_sys::Function>(),
                    millis,
                )
                .map_err(|e| log::warn!("Failed to set notice timer: {:?}", e))
                .ok()
        });

        Timeout {
            handle,
            _callback: callback,
        }
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let (Some(handle), Some(window)) = (self.handle, web_sys::window()) {
            window.clear_timeout_with_handle(handle);
        }
    }
}

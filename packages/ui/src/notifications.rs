use std::time::Duration;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use store::{NotificationKind, Notifications};

use crate::icons::{FaCircleCheck, FaCircleExclamation, FaCircleInfo, FaTriangleExclamation, FaXmark};
use crate::Icon;

pub fn use_notifications() -> Signal<Notifications> {
    use_context::<Signal<Notifications>>()
}

/// How long a toast of `kind` stays up before it is dismissed.
pub fn default_duration(kind: NotificationKind) -> Duration {
    match kind {
        NotificationKind::Error | NotificationKind::Warning => Duration::from_secs(5),
        NotificationKind::Success | NotificationKind::Info => Duration::from_secs(3),
    }
}

/// Show a toast and schedule its removal.
///
/// The timer runs in the root scope, so it outlives the page that raised the
/// toast (login navigates away right after "Login successful!").
pub fn notify(notifications: &mut Signal<Notifications>, kind: NotificationKind, message: &str) {
    let delay = default_duration(kind);
    let id = notifications.write().add(kind, message, Some(delay));
    let mut notifications = *notifications;
    let _ = spawn_forever(async move {
        sleep(delay).await;
        if let Ok(mut entries) = notifications.try_write() {
            entries.remove(id);
        }
    });
}

/// Open or close the named modal.
pub fn set_modal(notifications: &mut Signal<Notifications>, name: &str, open: bool) {
    notifications.write().toggle_modal(name, Some(open));
}

async fn sleep(delay: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(delay).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(delay).await;
}

/// Provides the notification signal and renders the toast stack above
/// `children`.
#[component]
pub fn NotificationProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(Notifications::new()));

    rsx! {
        {children}
        ToastStack {}
    }
}

#[component]
pub fn ToastStack() -> Element {
    let mut notifications = use_notifications();
    let entries = notifications.read().entries.clone();
    let loading = notifications.read().loading;

    rsx! {
        if loading {
            div { class: "console-busy", role: "progressbar" }
        }
        div {
            class: "toast-stack",
            for entry in entries {
                div {
                    key: "{entry.id}",
                    class: "toast toast-{entry.kind.as_str()}",
                    role: "status",
                    {toast_icon(entry.kind)}
                    span { class: "toast-message", "{entry.message}" }
                    button {
                        class: "toast-close",
                        title: "Dismiss",
                        onclick: move |_| notifications.write().remove(entry.id),
                        Icon { icon: FaXmark, width: 12, height: 12 }
                    }
                }
            }
        }
    }
}

fn toast_icon(kind: NotificationKind) -> Element {
    match kind {
        NotificationKind::Success => rsx! { Icon { icon: FaCircleCheck, width: 14, height: 14 } },
        NotificationKind::Error => rsx! { Icon { icon: FaCircleExclamation, width: 14, height: 14 } },
        NotificationKind::Warning => rsx! { Icon { icon: FaTriangleExclamation, width: 14, height: 14 } },
        NotificationKind::Info => rsx! { Icon { icon: FaCircleInfo, width: 14, height: 14 } },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[component]
    fn RedirectingPage() -> Element {
        let mut notifications = use_notifications();
        let mut open = use_context::<Signal<bool>>();
        use_hook(|| notify(&mut notifications, NotificationKind::Success, "Login successful!"));
        use_effect(move || open.set(false));
        rsx! { p { "redirecting" } }
    }

    fn redirecting_app() -> Element {
        let open = use_context_provider(|| Signal::new(true));
        rsx! {
            NotificationProvider {
                if open() {
                    RedirectingPage {}
                }
            }
        }
    }

    async fn run_for(dom: &mut VirtualDom, duration: Duration) {
        let end = tokio::time::Instant::now() + duration;
        while tokio::time::Instant::now() < end {
            let _ = tokio::time::timeout(Duration::from_millis(250), dom.wait_for_work()).await;
            dom.render_immediate_to_vec();
        }
    }

    #[component]
    fn ModalPage() -> Element {
        let mut notifications = use_notifications();
        use_hook(|| set_modal(&mut notifications, "create-exam", true));
        let open = notifications.read().is_modal_open("create-exam");
        rsx! {
            if open { p { "dialog open" } }
        }
    }

    #[test]
    fn set_modal_drives_store_flag() {
        let mut dom = VirtualDom::new(|| rsx! { NotificationProvider { ModalPage {} } });
        dom.rebuild_in_place();
        assert!(dioxus_ssr::render(&dom).contains("dialog open"));
    }

    #[tokio::test(start_paused = true)]
    async fn toast_is_removed_after_its_page_closes() {
        let mut dom = VirtualDom::new(redirecting_app);
        dom.rebuild_in_place();

        run_for(&mut dom, Duration::from_secs(1)).await;
        let html = dioxus_ssr::render(&dom);
        assert!(!html.contains("redirecting"));
        assert!(html.contains("Login successful!"));

        run_for(&mut dom, Duration::from_secs(20)).await;
        assert!(!dioxus_ssr::render(&dom).contains("Login successful!"));
    }

    #[test]
    fn errors_stay_longer_than_confirmations() {
        assert_eq!(default_duration(NotificationKind::Success), Duration::from_secs(3));
        assert_eq!(default_duration(NotificationKind::Error), Duration::from_secs(5));
        assert!(default_duration(NotificationKind::Warning) > default_duration(NotificationKind::Info));
    }
}

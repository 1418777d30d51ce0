//! # Role guards
//!
//! Every console route declares the roles allowed to see it. The decision is
//! a pure function, [`check_access`], so it can be tested without a router;
//! [`Protected`] applies it to the current session and [`RoleGate`] renders
//! the outcome.
//!
//! | Route | Roles |
//! |-------|-------|
//! | `/`, `/exams` | [`EVERYONE`] |
//! | `/submissions` | [`SUBMISSION_ROLES`] |
//! | `/grading` | [`GRADING_ROLES`] |
//! | `/violations` | [`VIOLATION_ROLES`] |

use dioxus::prelude::*;
use store::{Role, Session};

use crate::auth::use_auth;
use crate::views::UnauthorizedView;

pub const EVERYONE: &[Role] = &[Role::Admin, Role::Examiner, Role::Student];
pub const SUBMISSION_ROLES: &[Role] = &[Role::Admin, Role::Examiner];
pub const GRADING_ROLES: &[Role] = &[Role::Examiner];
pub const VIOLATION_ROLES: &[Role] = &[Role::Admin];

/// Outcome of checking a session against a route's allowed roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Granted,
    /// Nobody is signed in.
    Login,
    /// Signed in with a role the route does not allow.
    Denied,
}

pub fn check_access(session: Option<&Session>, roles: &[Role]) -> Access {
    match session {
        None => Access::Login,
        Some(session) if roles.contains(&session.role) => Access::Granted,
        Some(_) => Access::Denied,
    }
}

/// Renders `children` only for sessions whose role is in `roles`.
#[component]
pub fn Protected(roles: Vec<Role>, children: Element) -> Element {
    let auth = use_auth();
    let access = check_access(auth().session.as_ref(), &roles);

    rsx! {
        RoleGate { access: access, {children} }
    }
}

/// Renders the outcome of an access check. A denied role sees the
/// access-denied view in place; the protected children are never rendered.
#[component]
pub fn RoleGate(access: Access, children: Element) -> Element {
    match access {
        Access::Granted => rsx! { {children} },
        Access::Denied => rsx! { UnauthorizedView {} },
        Access::Login => rsx! { LoginRedirect {} },
    }
}

#[component]
fn LoginRedirect() -> Element {
    let nav = use_navigator();
    nav.replace("/login");
    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(role: Role) -> Session {
        Session {
            user_id: "u-1".to_string(),
            full_name: "Grace Hopper".to_string(),
            email: "grace@uni.edu".to_string(),
            role,
            access_token: "token".to_string(),
            refresh_token: None,
        }
    }

    #[test]
    fn test_no_session_goes_to_login() {
        assert_eq!(check_access(None, EVERYONE), Access::Login);
    }

    #[test]
    fn test_route_role_table() {
        let admin = session(Role::Admin);
        let examiner = session(Role::Examiner);
        let student = session(Role::Student);

        assert_eq!(check_access(Some(&student), EVERYONE), Access::Granted);
        assert_eq!(check_access(Some(&student), SUBMISSION_ROLES), Access::Denied);
        assert_eq!(check_access(Some(&examiner), SUBMISSION_ROLES), Access::Granted);
        assert_eq!(check_access(Some(&admin), GRADING_ROLES), Access::Denied);
        assert_eq!(check_access(Some(&examiner), GRADING_ROLES), Access::Granted);
        assert_eq!(check_access(Some(&examiner), VIOLATION_ROLES), Access::Denied);
        assert_eq!(check_access(Some(&admin), VIOLATION_ROLES), Access::Granted);
    }

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_denied_renders_access_denied_not_children() {
        let html = render(|| {
            rsx! {
                RoleGate { access: Access::Denied,
                    p { "violation ledger" }
                }
            }
        });
        assert!(html.contains("Access Denied"));
        assert!(!html.contains("violation ledger"));
    }

    #[test]
    fn test_granted_renders_children() {
        let html = render(|| {
            rsx! {
                RoleGate { access: Access::Granted,
                    p { "violation ledger" }
                }
            }
        });
        assert!(html.contains("violation ledger"));
        assert!(!html.contains("Access Denied"));
    }
}

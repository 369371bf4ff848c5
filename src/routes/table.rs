//! Static route table. Defined once, never mutated; every path and every name
//! is unique and `/login` is the only public entry.

use super::paths;
use std::fmt;

/// Renderable unit behind a route. The views themselves live outside this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum View {
    Profile,
    Hobbies,
    SimilarHobbies,
    FriendRequests,
    FriendsList,
    Login,
}

impl fmt::Display for View {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Profile => "Profile",
            Self::Hobbies => "Hobbies",
            Self::SimilarHobbies => "SimilarHobbies",
            Self::FriendRequests => "FriendRequests",
            Self::FriendsList => "FriendsList",
            Self::Login => "Login",
        };
        formatter.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
    pub requires_auth: bool,
}

impl RouteDescriptor {
    const fn protected(path: &'static str, name: &'static str, view: View) -> Self {
        Self {
            path,
            name,
            view,
            requires_auth: true,
        }
    }

    const fn public(path: &'static str, name: &'static str, view: View) -> Self {
        Self {
            path,
            name,
            view,
            requires_auth: false,
        }
    }
}

pub static ROUTES: [RouteDescriptor; 6] = [
    RouteDescriptor::protected(paths::PROFILE, "Profile", View::Profile),
    RouteDescriptor::protected(paths::HOBBIES, "Hobbies", View::Hobbies),
    RouteDescriptor::protected(
        paths::SIMILAR_HOBBIES,
        "SimilarHobbies",
        View::SimilarHobbies,
    ),
    RouteDescriptor::protected(
        paths::FRIEND_REQUESTS,
        "FriendRequests",
        View::FriendRequests,
    ),
    RouteDescriptor::protected(paths::FRIENDS_LIST, "FriendsList", View::FriendsList),
    RouteDescriptor::public(paths::LOGIN, "Login", View::Login),
];

/// Exact path lookup; trailing slashes are significant.
#[must_use]
pub fn find(path: &str) -> Option<&'static RouteDescriptor> {
    ROUTES.iter().find(|route| route.path == path)
}

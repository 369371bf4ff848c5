//! In-app route paths. Hard-redirect targets live in `web::config`.

pub const PROFILE: &str = "/profile";
pub const HOBBIES: &str = "/hobbies";
pub const SIMILAR_HOBBIES: &str = "/similar_hobbies";
pub const FRIEND_REQUESTS: &str = "/friend_requests";
pub const FRIENDS_LIST: &str = "/friends_list";
pub const LOGIN: &str = "/login";

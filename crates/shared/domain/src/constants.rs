//! Property keys as they appear in configuration sources.

pub const REMOTE_URL: &str = "remoteURL";
pub const USERNAME: &str = "username";
pub const PASSWORD: &str = "password";
pub const CLIENT_ID: &str = "clientId";
pub const RECEIVE_LOCAL_ONLY: &str = "receiveLocalOnly";
pub const RECEIVE_NO_WAIT_LOCAL_ONLY: &str = "receiveNoWaitLocalOnly";
pub const DESERIALIZATION_POLICY: &str = "deserializationPolicy";
pub const WHITE_LIST: &str = "whiteList";
pub const BLACK_LIST: &str = "blackList";

//! Layout of service state in the shared store. Each service owns a prefix, and each log key owns
//! two sub-keys with distinct suffixes, so no two units of state can land on the same store key.

pub(crate) fn counter_key(key: &str) -> String {
    format!("counter/{}", key)
}

pub(crate) fn log_offset_key(key: &str) -> String {
    format!("log/{}/next_offset", key)
}

pub(crate) fn log_body_key(key: &str) -> String {
    format!("log/{}/body", key)
}

pub(crate) fn commit_key(key: &str) -> String {
    format!("commit/{}", key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_sub_keys_never_collide() {
        // A log named like another log's sub-key still gets its own pair.
        assert_ne!(log_offset_key("a/body"), log_body_key("a"));
        assert_ne!(log_body_key("a/next_offset"), log_offset_key("a"));
        assert_ne!(log_body_key("a"), log_offset_key("a"));
    }
}

pub const SAVE_ANSWER: &str = "/admin/save-answer";
pub const DELETE_ALL_STATS: &str = "/admin/stats/delete-all";
pub const DOWNLOAD_STATISTICS: &str = "/api/admin/statistics/download";

const DELETE_STATS_PREFIX: &str = "/admin/stats/delete/";

// The id is an opaque key and goes on the wire untouched, the same way the
// statistics page addresses it.
pub fn delete_user_path(user_id: &str) -> String {
    format!("{DELETE_STATS_PREFIX}{user_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_path_embeds_user_id() {
        assert_eq!(delete_user_path("u-17"), "/admin/stats/delete/u-17");
    }
}

//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    #[sql_name = "task"]
    tasks (id) {
        /// Store-assigned task identifier.
        id -> Int4,
        /// Task description.
        #[sql_name = "task"]
        description -> Text,
        /// Free-text assignee.
        #[sql_name = "assign"]
        assignee -> Nullable<Text>,
        /// Deadline persisted as midnight UTC of the calendar date.
        deadline -> Timestamptz,
        /// Completion flag.
        is_done -> Bool,
    }
}

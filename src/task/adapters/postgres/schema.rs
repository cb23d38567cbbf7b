//! Diesel schema for task tracking persistence.

diesel::table! {
    /// Live task records; one row per active task.
    ///
    /// A unique index on `user_uuid` enforces at-most-one-active-task per
    /// user, and the foreign key to `users` rejects tasks for unknown users.
    tasks (uuid) {
        /// Task identifier.
        uuid -> Uuid,
        /// Owner identifier, unique among live rows.
        user_uuid -> Uuid,
        /// Task name.
        #[max_length = 255]
        name -> Varchar,
        /// Start timestamp.
        start_time -> Timestamptz,
        /// End timestamp, set transiently while archiving.
        end_time -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    /// Append-only archive of finished tasks.
    task_history (uuid) {
        /// Archive record identifier.
        uuid -> Uuid,
        /// Identifier of the archived live task.
        task_uuid -> Uuid,
        /// Owner identifier.
        user_uuid -> Uuid,
        /// Task name.
        #[max_length = 255]
        name -> Varchar,
        /// Start timestamp.
        start_time -> Timestamptz,
        /// End timestamp.
        end_time -> Timestamptz,
        /// Elapsed time between start and end.
        duration -> Interval,
    }
}

diesel::allow_tables_to_appear_in_same_query!(tasks, task_history);

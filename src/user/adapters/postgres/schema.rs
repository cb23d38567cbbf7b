//! Diesel schema for user persistence.

diesel::table! {
    /// User records keyed by UUID with a unique passport number.
    users (id) {
        /// User identifier.
        id -> Uuid,
        /// Canonical `SSSS NNNNNN` passport number, unique across users.
        #[max_length = 11]
        passport_number -> Varchar,
        /// Surname.
        #[max_length = 255]
        surname -> Varchar,
        /// Given name.
        #[max_length = 255]
        name -> Varchar,
        /// Optional patronymic.
        #[max_length = 255]
        patronymic -> Nullable<Varchar>,
        /// Address.
        #[max_length = 512]
        address -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

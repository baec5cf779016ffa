table! {
    users (id) {
        id -> Text,
        email -> Text,
        first_name -> Text,
        last_name -> Text,
        picture_url -> Nullable<Text>,
        city -> Nullable<Text>,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

table! {
    maps (id) {
        id -> Text,
        slug -> Text,
        title -> Text,
        short_description -> Text,
        body -> Text,
        picture_url -> Nullable<Text>,
        owner_id -> Text,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

joinable!(maps -> users (owner_id));

table! {
    locations (id) {
        id -> Text,
        map_id -> Text,
        creator_id -> Text,
        name -> Text,
        lat -> Double,
        lng -> Double,
        source_url -> Text,
        note -> Nullable<Text>,
        status -> SmallInt,
        is_approved -> Bool,
        created_at -> BigInt,
    }
}

joinable!(locations -> maps (map_id));
joinable!(locations -> users (creator_id));

table! {
    votes (map_id, user_id) {
        map_id -> Text,
        user_id -> Text,
        created_at -> BigInt,
    }
}

joinable!(votes -> maps (map_id));
joinable!(votes -> users (user_id));

allow_tables_to_appear_in_same_query!(users, maps, locations, votes);

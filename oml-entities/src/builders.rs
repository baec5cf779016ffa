pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{location_builder::*, map_builder::*, user_builder::*};

pub mod map_builder {

    use super::*;
    use crate::{id::*, map::*, slug::*, time::*};

    #[derive(Debug)]
    pub struct MapBuild {
        map: Map,
    }

    impl MapBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.map.id = id.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.map.slug = Slug::from_title(title);
            self.map.title = title.into();
            self
        }
        pub fn slug(mut self, slug: &str) -> Self {
            self.map.slug = slug.into();
            self
        }
        pub fn short_description(mut self, desc: &str) -> Self {
            self.map.short_description = desc.into();
            self
        }
        pub fn body(mut self, body: &str) -> Self {
            self.map.body = body.into();
            self
        }
        pub fn owner(mut self, owner_id: &str) -> Self {
            self.map.owner_id = owner_id.into();
            self
        }
        pub fn finish(self) -> Map {
            self.map
        }
    }

    impl Builder for Map {
        type Build = MapBuild;
        fn build() -> Self::Build {
            MapBuild {
                map: Map {
                    id: Id::new(),
                    slug: Slug::from_title("untitled"),
                    title: "untitled".into(),
                    short_description: "A map".into(),
                    body: "...".into(),
                    picture_url: None,
                    owner_id: Id::new(),
                    created_at: Timestamp::now(),
                    updated_at: Timestamp::now(),
                },
            }
        }
    }

    impl Map {
        pub fn build() -> MapBuild {
            <Map as Builder>::build()
        }
    }
}

pub mod location_builder {

    use super::*;
    use crate::{geo::*, id::*, location::*, moderation::*, time::*};

    #[derive(Debug)]
    pub struct LocationBuild {
        location: Location,
    }

    impl LocationBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.location.id = id.into();
            self
        }
        pub fn map(mut self, map_id: &str) -> Self {
            self.location.map_id = map_id.into();
            self
        }
        pub fn creator(mut self, creator_id: &str) -> Self {
            self.location.creator_id = creator_id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.location.name = name.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.location.pos = pos;
            self
        }
        pub fn status(mut self, status: ModerationStatus) -> Self {
            self.location.status = status;
            self.location.is_approved = status.is_approved();
            self
        }
        pub fn finish(self) -> Location {
            debug_assert!(self.location.invariant_holds());
            self.location
        }
    }

    impl Builder for Location {
        type Build = LocationBuild;
        fn build() -> Self::Build {
            LocationBuild {
                location: Location {
                    id: Id::new(),
                    map_id: Id::new(),
                    creator_id: Id::new(),
                    name: "somewhere".into(),
                    pos: MapPoint::try_from_lat_lng_deg(0.0, 0.0).unwrap(),
                    source_url: "https://maps.example.com/place".into(),
                    note: None,
                    status: ModerationStatus::default(),
                    is_approved: false,
                    created_at: Timestamp::now(),
                },
            }
        }
    }

    impl Location {
        pub fn build() -> LocationBuild {
            <Location as Builder>::build()
        }
    }
}

pub mod user_builder {

    use super::*;
    use crate::{email::*, id::*, time::*, user::*};

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.user.id = id.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.user.email = EmailAddress::new_unchecked(email.into());
            self
        }
        pub fn name(mut self, first: &str, last: &str) -> Self {
            self.user.first_name = first.into();
            self.user.last_name = last.into();
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> Self::Build {
            UserBuild {
                user: User {
                    id: Id::new(),
                    email: EmailAddress::new_unchecked("user@example.com".into()),
                    first_name: "User".into(),
                    last_name: String::new(),
                    picture_url: None,
                    city: None,
                    created_at: Timestamp::now(),
                    updated_at: Timestamp::now(),
                },
            }
        }
    }

    impl User {
        pub fn build() -> UserBuild {
            <User as Builder>::build()
        }
    }
}

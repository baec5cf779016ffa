use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone)]
pub struct NewMap {
    pub title: String,
    pub short_description: String,
    pub body: String,
    pub picture_url: Option<String>,
}

pub fn create_map<R: MapRepo>(repo: &R, owner: &User, new_map: NewMap) -> Result<Map> {
    let NewMap {
        title,
        short_description,
        body,
        picture_url,
    } = new_map;
    if !validate::is_nonempty_text(&title) {
        return Err(Error::Title);
    }
    if !validate::is_nonempty_text(&short_description) {
        return Err(Error::ShortDescription);
    }
    if !validate::is_nonempty_text(&body) {
        return Err(Error::Body);
    }
    let slug = super::generate_unique_map_slug(repo, &title, None)?;
    let now = Timestamp::now();
    let map = Map {
        id: Id::new(),
        slug,
        title,
        short_description,
        body,
        picture_url,
        owner_id: owner.id.clone(),
        created_at: now,
        updated_at: now,
    };
    log::info!("Creating map {} with slug '{}'", map.id, map.slug);
    repo.create_map(&map)?;
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::{
        super::{tests::MockDb, *},
        *,
    };
    use oml_entities::builders::*;

    fn new_map(title: &str) -> NewMap {
        NewMap {
            title: title.into(),
            short_description: "short".into(),
            body: "body".into(),
            picture_url: None,
        }
    }

    #[test]
    fn create_map_with_derived_slug() {
        let db = MockDb::default();
        let owner = User::build().id("owner").finish();
        let map = create_map(&db, &owner, new_map("Cafes With Wifi")).unwrap();
        assert_eq!("cafes-with-wifi", map.slug.as_str());
        assert_eq!(owner.id, map.owner_id);
        assert_eq!(1, db.count_maps().unwrap());
    }

    #[test]
    fn create_map_with_colliding_title() {
        let db = MockDb::default();
        let owner = User::build().finish();
        let first = create_map(&db, &owner, new_map("Parks")).unwrap();
        let second = create_map(&db, &owner, new_map("Parks")).unwrap();
        assert_eq!("parks", first.slug.as_str());
        assert_eq!("parks-1", second.slug.as_str());
    }

    #[test]
    fn reject_missing_fields() {
        let db = MockDb::default();
        let owner = User::build().finish();
        let mut missing_title = new_map(" ");
        missing_title.title = "  ".into();
        assert!(matches!(
            create_map(&db, &owner, missing_title),
            Err(Error::Title)
        ));
        let mut missing_desc = new_map("Parks");
        missing_desc.short_description = String::new();
        assert!(matches!(
            create_map(&db, &owner, missing_desc),
            Err(Error::ShortDescription)
        ));
        let mut missing_body = new_map("Parks");
        missing_body.body = "\n".into();
        assert!(matches!(
            create_map(&db, &owner, missing_body),
            Err(Error::Body)
        ));
        assert_eq!(0, db.count_maps().unwrap());
    }
}

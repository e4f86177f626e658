//! Entity registration with dense, document-wide keys.

use crate::model::{Entity, EntityData, EntityMap, ImageData};

/// Hands out entity keys `0, 1, 2, ...` in registration order.
///
/// One registry lives for exactly one conversion call.
#[derive(Debug, Default)]
pub struct EntityRegistry {
    entities: Vec<Entity>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a mutable entity and return its key.
    pub fn assign(&mut self, data: EntityData) -> u32 {
        let key = self.entities.len() as u32;
        log::debug!("entity {key}: {:?}", data.entity_type());
        self.entities.push(Entity::new(data));
        key
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Close the registry and produce the entity map.
    pub fn finalize(self) -> EntityMap {
        EntityMap::from_vec(self.entities)
    }
}

/// Format an HTML sizing attribute as a CSS length.
///
/// Plain numbers gain a `px` suffix, `<n>px` passes through, and anything
/// else (missing, empty, percentages, garbage) becomes `initial`.
pub fn css_size(value: Option<&str>) -> String {
    const INITIAL: &str = "initial";

    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return INITIAL.to_string();
    };
    let number = raw.strip_suffix("px").unwrap_or(raw).trim_end();
    match number.parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 => format!("{number}px"),
        _ => {
            log::warn!("ignoring non-numeric image size {raw:?}");
            INITIAL.to_string()
        }
    }
}

/// Build image entity data from raw attribute values.
pub fn image_data(
    src: &str,
    alt: &str,
    height: Option<&str>,
    width: Option<&str>,
) -> EntityData {
    EntityData::Image(ImageData {
        alt: alt.to_string(),
        src: src.to_string(),
        height: css_size(height),
        width: css_size(width),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntityType;

    #[test]
    fn test_keys_are_dense() {
        let mut registry = EntityRegistry::new();
        assert_eq!(registry.assign(EntityData::link("a")), 0);
        assert_eq!(registry.assign(image_data("x.png", "", None, None)), 1);
        assert_eq!(registry.assign(EntityData::link("b")), 2);

        let map = registry.finalize();
        let types: Vec<_> = map.iter().map(|(k, e)| (k, e.entity_type)).collect();
        assert_eq!(
            types,
            vec![
                (0, EntityType::Link),
                (1, EntityType::Image),
                (2, EntityType::Link)
            ]
        );
    }

    #[test]
    fn test_css_size() {
        assert_eq!(css_size(Some("255")), "255px");
        assert_eq!(css_size(Some(" 40 ")), "40px");
        assert_eq!(css_size(Some("12.5")), "12.5px");
        assert_eq!(css_size(Some("30px")), "30px");
        assert_eq!(css_size(None), "initial");
        assert_eq!(css_size(Some("")), "initial");
        assert_eq!(css_size(Some("50%")), "initial");
        assert_eq!(css_size(Some("auto")), "initial");
        assert_eq!(css_size(Some("-3")), "initial");
        assert_eq!(css_size(Some("NaN")), "initial");
    }

    #[test]
    fn test_image_data_defaults() {
        let data = image_data("picture.png", "my picture", Some("255"), None);
        assert_eq!(
            serde_json::to_value(data).unwrap(),
            serde_json::json!({
                "alt": "my picture",
                "src": "picture.png",
                "height": "255px",
                "width": "initial"
            })
        );
    }
}

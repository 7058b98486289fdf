//! Route pattern helpers for request logs.

use printshop::posters::PosterSize;
use uuid::Uuid;

/// Collapse ids in `path` so requests to the same route log alike.
pub(super) fn route_pattern(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
    let mut pattern = String::new();

    for (index, segment) in segments.iter().enumerate() {
        pattern.push('/');

        let parent = index
            .checked_sub(1)
            .and_then(|previous| segments.get(previous))
            .copied();

        if Uuid::parse_str(segment).is_ok() {
            pattern.push_str("{uuid}");
        } else if matches!(parent, Some("posters" | "items")) {
            pattern.push_str("{poster}");
        } else if segment.parse::<PosterSize>().is_ok() {
            pattern.push_str("{size}");
        } else {
            pattern.push_str(segment);
        }
    }

    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_unchanged() {
        assert_eq!(route_pattern("/"), "/");
    }

    #[test]
    fn cart_item_ids_are_collapsed() {
        let path = format!("/carts/{}/items/interstellar/A3", Uuid::now_v7());

        assert_eq!(route_pattern(&path), "/carts/{uuid}/items/{poster}/{size}");
    }

    #[test]
    fn poster_id_is_collapsed() {
        assert_eq!(route_pattern("/posters/monstera"), "/posters/{poster}");
        assert_eq!(route_pattern("/posters"), "/posters");
    }
}

use serde::Serialize;

use crate::entity::HypesquadHouse;

/// Body of a hypesquad join request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HypesquadJoin {
    pub house_id: HypesquadHouse,
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn house_is_sent_as_code() {
        let body = serde_json::to_value(HypesquadJoin {
            house_id: HypesquadHouse::Brilliance,
        })
        .unwrap();
        assert_eq!(body, json!({ "house_id": 2 }));
    }
}

use almanac_traits::FontRole;

/// The resource name a page uses to select the font of `role`.
pub fn font_resource_name(role: FontRole) -> &'static str {
    match role {
        FontRole::Body => "F1",
        FontRole::Display => "F2",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_names_are_distinct() {
        assert_ne!(
            font_resource_name(FontRole::Body),
            font_resource_name(FontRole::Display)
        );
    }
}

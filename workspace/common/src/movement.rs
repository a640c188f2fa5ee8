//! Display classification of inventory movement types.

/// Recognised movement categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementKind {
    Sale,
    Purchase,
    Adjustment,
    Return,
    Other,
}

impl MovementKind {
    pub fn label(&self) -> &'static str {
        match self {
            MovementKind::Sale => "Sale",
            MovementKind::Purchase => "Purchase",
            MovementKind::Adjustment => "Adjustment",
            MovementKind::Return => "Return",
            MovementKind::Other => "Other",
        }
    }
}

/// How a movement type is drawn: icon, text colour and left accent border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementDescriptor {
    pub kind: MovementKind,
    pub icon: &'static str,
    pub color_class: &'static str,
    pub border_class: &'static str,
}

const SALE: MovementDescriptor = MovementDescriptor {
    kind: MovementKind::Sale,
    icon: "fas fa-shopping-cart",
    color_class: "text-error",
    border_class: "border-l-error",
};

const PURCHASE: MovementDescriptor = MovementDescriptor {
    kind: MovementKind::Purchase,
    icon: "fas fa-truck-loading",
    color_class: "text-success",
    border_class: "border-l-success",
};

const ADJUSTMENT: MovementDescriptor = MovementDescriptor {
    kind: MovementKind::Adjustment,
    icon: "fas fa-sliders-h",
    color_class: "text-warning",
    border_class: "border-l-warning",
};

const RETURN: MovementDescriptor = MovementDescriptor {
    kind: MovementKind::Return,
    icon: "fas fa-undo",
    color_class: "text-info",
    border_class: "border-l-info",
};

const DEFAULT: MovementDescriptor = MovementDescriptor {
    kind: MovementKind::Other,
    icon: "fas fa-box",
    color_class: "text-base-content",
    border_class: "border-l-base-300",
};

/// Maps a movement type string to its descriptor, ignoring case and
/// surrounding whitespace. Unknown, empty and missing types share the
/// default descriptor.
pub fn classify_movement(log_type: Option<&str>) -> MovementDescriptor {
    let Some(raw) = log_type else {
        return DEFAULT;
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "sale" => SALE,
        "purchase" => PURCHASE,
        "adjustment" => ADJUSTMENT,
        "return" => RETURN,
        _ => DEFAULT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_is_case_insensitive() {
        let lower = classify_movement(Some("sale"));
        assert_eq!(classify_movement(Some("SALE")), lower);
        assert_eq!(classify_movement(Some("Sale")), lower);
        assert_eq!(lower.kind, MovementKind::Sale);
    }

    #[test]
    fn test_classify_known_types() {
        assert_eq!(classify_movement(Some("purchase")).kind, MovementKind::Purchase);
        assert_eq!(classify_movement(Some("Adjustment")).kind, MovementKind::Adjustment);
        assert_eq!(classify_movement(Some(" return ")).kind, MovementKind::Return);
    }

    #[test]
    fn test_classify_falls_back_to_default() {
        let default = classify_movement(None);
        assert_eq!(default.kind, MovementKind::Other);
        assert_eq!(classify_movement(Some("")), default);
        assert_eq!(classify_movement(Some("transfer")), default);
        assert_eq!(classify_movement(Some("other")), default);
    }

    #[test]
    fn test_descriptors_are_distinct() {
        let kinds = ["sale", "purchase", "adjustment", "return", "unknown"];
        let icons: std::collections::HashSet<_> = kinds
            .iter()
            .map(|k| classify_movement(Some(*k)).icon)
            .collect();
        assert_eq!(icons.len(), kinds.len());
    }
}

/// Estado de interacción del mapa, controlado por el host (`is_custom`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickMode {
    /// Los clicks se ignoran
    #[default]
    Locked,
    /// Un click elige una coordenada y se envía al host
    Pickable,
}

impl PickMode {
    pub fn from_is_custom(is_custom: bool) -> Self {
        if is_custom {
            PickMode::Pickable
        } else {
            PickMode::Locked
        }
    }

    pub fn is_pickable(self) -> bool {
        matches!(self, PickMode::Pickable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_locked() {
        assert_eq!(PickMode::default(), PickMode::Locked);
        assert!(!PickMode::default().is_pickable());
    }

    #[test]
    fn test_from_is_custom() {
        assert_eq!(PickMode::from_is_custom(true), PickMode::Pickable);
        assert_eq!(PickMode::from_is_custom(false), PickMode::Locked);
    }
}

use crate::domain::profile::{ScentFamily, ScentProfile};

/// Dominant family of a profile.
///
/// Ties go to the dimension checked first (oud, amber, floral, gourmand). A
/// profile with no positive component is `Signature`.
pub fn family_from_profile(profile: &ScentProfile) -> ScentFamily {
    let max = profile.max_component();
    if max <= 0.0 || max.is_nan() {
        return ScentFamily::Signature;
    }

    if profile.oud == max {
        ScentFamily::OudRich
    } else if profile.amber == max {
        ScentFamily::AmberGold
    } else if profile.floral == max {
        ScentFamily::FloralFresh
    } else if profile.gourmand == max {
        ScentFamily::GourmandUnique
    } else {
        ScentFamily::Signature
    }
}

#[cfg(test)]
mod tests {
    use super::family_from_profile;
    use crate::domain::profile::{ScentFamily, ScentWeights};
    use crate::domain::quiz::QuizAnswer;
    use crate::recommend::calculate_scent_profile;

    #[test]
    fn bold_mysterious_profile_is_oud_rich() {
        let profile = calculate_scent_profile(&[QuizAnswer::new("mood", "bold-mysterious")]);
        assert_eq!(family_from_profile(&profile), ScentFamily::OudRich);
    }

    #[test]
    fn strict_max_selects_family() {
        assert_eq!(
            family_from_profile(&ScentWeights::new(0.1, 0.6, 0.2, 0.1)),
            ScentFamily::AmberGold
        );
        assert_eq!(
            family_from_profile(&ScentWeights::new(0.1, 0.1, 0.7, 0.1)),
            ScentFamily::FloralFresh
        );
        assert_eq!(
            family_from_profile(&ScentWeights::new(0.1, 0.1, 0.1, 0.7)),
            ScentFamily::GourmandUnique
        );
    }

    #[test]
    fn ties_favour_earlier_dimensions() {
        assert_eq!(
            family_from_profile(&ScentWeights::new(0.4, 0.4, 0.1, 0.1)),
            ScentFamily::OudRich
        );
        assert_eq!(
            family_from_profile(&ScentWeights::new(0.1, 0.1, 0.4, 0.4)),
            ScentFamily::FloralFresh
        );
    }

    #[test]
    fn zero_profile_is_signature() {
        assert_eq!(family_from_profile(&ScentWeights::ZERO), ScentFamily::Signature);
    }
}

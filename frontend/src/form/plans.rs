use crate::i18n::{t, Key, Locale};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub id: &'static str,
    pub name: &'static str,
    pub price: u32,
    pub description: &'static str,
    pub features: Vec<&'static str>,
}

impl Plan {
    pub fn price_label(&self) -> String {
        format!("${}", self.price)
    }
}

/// Highlighted in the pricing section.
pub const POPULAR_PLAN: &str = "grow";

struct PlanSpec {
    id: &'static str,
    price: u32,
    name: Key,
    description: Key,
    features: &'static [Key],
}

const PLANS: [PlanSpec; 4] = [
    PlanSpec {
        id: "startup",
        price: 479,
        name: Key::PlanStartupName,
        description: Key::PlanStartupDescription,
        features: &[Key::FeatureCustomDesign, Key::FeatureResponsive, Key::FeatureBasicSeo],
    },
    PlanSpec {
        id: "grow",
        price: 700,
        name: Key::PlanGrowName,
        description: Key::PlanGrowDescription,
        features: &[Key::FeatureEverythingBefore, Key::FeatureAnimations, Key::FeatureForms],
    },
    PlanSpec {
        id: "scale-up",
        price: 990,
        name: Key::PlanScaleUpName,
        description: Key::PlanScaleUpDescription,
        features: &[Key::FeatureEverythingBefore, Key::FeatureCrm, Key::FeatureAnalytics],
    },
    PlanSpec {
        id: "enterprise",
        price: 1490,
        name: Key::PlanEnterpriseName,
        description: Key::PlanEnterpriseDescription,
        features: &[Key::FeatureEverythingBefore, Key::FeatureUnlimitedRevisions],
    },
];

/// Plans offered in the contact form, with copy in the given language.
pub fn catalog(locale: Locale) -> Vec<Plan> {
    PLANS
        .iter()
        .map(|spec| Plan {
            id: spec.id,
            name: t(locale, spec.name),
            price: spec.price,
            description: t(locale, spec.description),
            features: spec.features.iter().map(|key| t(locale, *key)).collect(),
        })
        .collect()
}

pub fn find<'a>(plans: &'a [Plan], id: &str) -> Option<&'a Plan> {
    plans.iter().find(|plan| plan.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_ids_are_stable_across_languages() {
        let es: Vec<_> = catalog(Locale::Es).iter().map(|p| (p.id, p.price)).collect();
        let pt: Vec<_> = catalog(Locale::Pt).iter().map(|p| (p.id, p.price)).collect();
        assert_eq!(es, pt);
        assert_eq!(es, vec![("startup", 479), ("grow", 700), ("scale-up", 990), ("enterprise", 1490)]);
    }

    #[test]
    fn find_looks_up_by_id() {
        let plans = catalog(Locale::Pt);
        let grow = find(&plans, "grow").unwrap();
        assert_eq!(grow.name, "Grow");
        assert_eq!(grow.price_label(), "$700");
        assert_eq!(grow.description, "Para pequenas empresas em crescimento");
        assert_eq!(grow.features.len(), 3);
        assert!(find(&plans, "gold").is_none());
        assert!(find(&plans, POPULAR_PLAN).is_some());
    }
}

use crate::{data::vehicle::Vehicle, matching::match_context::MatchContext};

/// Disqualifying conditions, checked before any scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardConstraint {
    Available,
    Capacity,
    SpecialHandling,
}

impl HardConstraint {
    pub const ALL: [HardConstraint; 3] = [
        HardConstraint::Available,
        HardConstraint::Capacity,
        HardConstraint::SpecialHandling,
    ];

    pub fn is_satisfied(&self, context: &MatchContext, vehicle: &Vehicle) -> bool {
        match self {
            HardConstraint::Available => vehicle.is_available(),
            HardConstraint::Capacity => {
                vehicle.capacity_kg.is_finite() && vehicle.capacity_kg >= context.required_kg
            }
            HardConstraint::SpecialHandling => context
                .params
                .supports_handling(&context.order.special_handling, &vehicle.vehicle_type),
        }
    }

    pub fn constraint_name(&self) -> &'static str {
        match self {
            HardConstraint::Available => "available",
            HardConstraint::Capacity => "capacity",
            HardConstraint::SpecialHandling => "special_handling",
        }
    }

    /// First violated constraint, if any.
    pub fn first_violation(context: &MatchContext, vehicle: &Vehicle) -> Option<HardConstraint> {
        HardConstraint::ALL
            .into_iter()
            .find(|constraint| !constraint.is_satisfied(context, vehicle))
    }
}

pub mod city_coordinates;
pub mod feature_ranges;
pub mod hard_constraint;
pub mod match_context;
pub mod matcher;
pub mod matching_params;
pub mod scoring;
pub mod vehicle_match;

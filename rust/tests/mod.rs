mod engine_scenarios;
mod plural_properties;

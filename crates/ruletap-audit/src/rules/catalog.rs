//! Built-in rule catalogue
//!
//! Representative subset of the configurator's input-validation rules for
//! belt conveyors. Order inside each function is significant: when two rules
//! share field and severity, the earlier one has first claim on a fired
//! message. A rule with a `message_match` is the only rule for its field
//! and severity, otherwise keyword scoring could hand its message to a
//! sibling or hand a sibling's message to it.

use ruletap_domain::{RuleCategory, RuleDefinition, Severity};

struct RuleRow {
    rule_id: &'static str,
    human_name: &'static str,
    category: RuleCategory,
    field: &'static str,
    severity: Severity,
    description: &'static str,
    source_function: &'static str,
    source_line: u32,
    message_match: Option<&'static str>,
}

impl RuleRow {
    fn build(self) -> RuleDefinition {
        RuleDefinition {
            rule_id: self.rule_id.into(),
            human_name: self.human_name.into(),
            check_description: self.description.into(),
            category: self.category,
            field: self.field.into(),
            default_severity: self.severity,
            source_function: self.source_function.into(),
            source_line: Some(self.source_line),
            message_match: self.message_match.map(Into::into),
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn row(
    rule_id: &'static str,
    human_name: &'static str,
    category: RuleCategory,
    field: &'static str,
    severity: Severity,
    description: &'static str,
    source_function: &'static str,
    source_line: u32,
) -> RuleRow {
    RuleRow {
        rule_id,
        human_name,
        category,
        field,
        severity,
        description,
        source_function,
        source_line,
        message_match: None,
    }
}

impl RuleRow {
    fn matching(mut self, needle: &'static str) -> Self {
        self.message_match = Some(needle);
        self
    }
}

/// All built-in rules, in registry iteration order
pub fn standard_rules() -> Vec<RuleDefinition> {
    application_rules()
        .into_iter()
        .chain(geometry_rules())
        .chain(belt_rules())
        .chain(pulley_rules())
        .chain(speed_rules())
        .chain(drive_rules())
        .chain(material_rules())
        .chain(safety_rules())
        .chain(parameter_rules())
        .map(RuleRow::build)
        .collect()
}

fn application_rules() -> Vec<RuleRow> {
    use RuleCategory::Application;
    use Severity::{Error, Info, Warning};
    vec![
        row(
            "va_environment_required",
            "Environment Selected",
            Application,
            "environment",
            Error,
            "Environment must be selected",
            "validate_application",
            42,
        ),
        row(
            "va_washdown_material",
            "Washdown Compatible Frame",
            Application,
            "frame_material",
            Warning,
            "Washdown environment requires stainless steel frame material",
            "validate_application",
            58,
        )
        .matching("washdown"),
        row(
            "va_ambient_temp_high",
            "Ambient Temperature High",
            Application,
            "ambient_temp_f",
            Warning,
            "Ambient temperature above 120 F reduces belt life",
            "validate_application",
            71,
        ),
        row(
            "va_ambient_temp_low",
            "Ambient Temperature Low",
            Application,
            "ambient_temp_f",
            Info,
            "Ambient temperature below 32 F may require cold-rated belting",
            "validate_application",
            84,
        ),
    ]
}

fn geometry_rules() -> Vec<RuleRow> {
    use RuleCategory::Geometry;
    use Severity::{Error, Info, Warning};
    vec![
        row(
            "vi_conveyor_length_max",
            "Conveyor Length Maximum",
            Geometry,
            "product_family",
            Error,
            "Conveyor Length (C-C) exceeds the maximum supported length for the product family",
            "validate_inputs",
            119,
        )
        .matching("exceeds the maximum"),
        row(
            "vi_conveyor_length_zero",
            "Conveyor Length Positive",
            Geometry,
            "conveyor_length_cc_in",
            Error,
            "Conveyor Length (C-C) must be greater than 0",
            "validate_inputs",
            112,
        ),
        row(
            "vi_conveyor_length_long",
            "Long Conveyor Advisory",
            Geometry,
            "conveyor_length_cc_in",
            Warning,
            "Conveyor longer than 100 feet should be split into sections",
            "validate_inputs",
            131,
        ),
        row(
            "vi_incline_range",
            "Incline Angle Range",
            Geometry,
            "conveyor_incline_deg",
            Error,
            "Incline angle must be between -30 and 30 degrees",
            "validate_inputs",
            146,
        ),
        row(
            "vi_incline_cleats",
            "Steep Incline Cleats",
            Geometry,
            "conveyor_incline_deg",
            Warning,
            "Incline steeper than 15 degrees requires cleated belt",
            "validate_inputs",
            158,
        )
        .matching("cleat"),
        row(
            "vi_infeed_height_positive",
            "Infeed Height Positive",
            Geometry,
            "infeed_height_in",
            Error,
            "Infeed height must be greater than 0",
            "validate_inputs",
            170,
        ),
        row(
            "vi_discharge_height_match",
            "Discharge Height Consistency",
            Geometry,
            "discharge_height_in",
            Warning,
            "Discharge height does not match length and incline geometry",
            "validate_geometry",
            33,
        ),
        row(
            "vi_bed_type_inclined",
            "Bed Type On Incline",
            Geometry,
            "bed_type",
            Info,
            "Roller bed conveyors are not recommended on inclines",
            "validate_geometry",
            51,
        ),
    ]
}

fn belt_rules() -> Vec<RuleRow> {
    use RuleCategory::Belt;
    use Severity::{Error, Warning};
    vec![
        row(
            "vb_belt_width_positive",
            "Belt Width Positive",
            Belt,
            "belt_width_in",
            Error,
            "Belt width must be greater than 0",
            "validate_inputs",
            188,
        ),
        row(
            "vb_belt_width_standard",
            "Standard Belt Width",
            Belt,
            "belt_width_in",
            Warning,
            "Belt width is not a standard catalog width",
            "validate_belt",
            27,
        ),
        row(
            "vb_part_wider_than_belt",
            "Part Fits Belt",
            Belt,
            "part_width_in",
            Error,
            "Part width must not exceed belt width",
            "validate_belt",
            40,
        ),
        row(
            "vb_belt_required",
            "Belt Selected",
            Belt,
            "belt_catalog_key",
            Error,
            "Belt type must be selected from the catalog",
            "validate_belt",
            55,
        ),
        row(
            "vb_belt_tracking",
            "Belt Tracking Method",
            Belt,
            "tracking_method",
            Warning,
            "V-guided tracking recommended for length to width ratio above 10",
            "validate_belt",
            68,
        )
        .matching("V-guided"),
        row(
            "vb_belt_temp_rating",
            "Belt Temperature Rating",
            Belt,
            "belt_catalog_key",
            Warning,
            "Selected belt temperature rating is below the product temperature",
            "validate_belt",
            81,
        ),
    ]
}

fn pulley_rules() -> Vec<RuleRow> {
    use RuleCategory::Pulley;
    use Severity::{Error, Warning};
    vec![
        row(
            "vp_drive_pulley_min",
            "Drive Pulley Minimum Diameter",
            Pulley,
            "drive_pulley_diameter_in",
            Error,
            "Drive pulley diameter is below the belt minimum pulley diameter",
            "validate_pulleys",
            19,
        ),
        row(
            "vp_tail_pulley_min",
            "Tail Pulley Minimum Diameter",
            Pulley,
            "tail_pulley_diameter_in",
            Error,
            "Tail pulley diameter is below the belt minimum pulley diameter",
            "validate_pulleys",
            31,
        ),
        row(
            "vp_pulley_face_width",
            "Pulley Face Width",
            Pulley,
            "pulley_face_width_in",
            Error,
            "Pulley face width must be at least belt width plus 2 inches",
            "validate_pulleys",
            44,
        ),
        row(
            "vp_lagging_recommended",
            "Drive Pulley Lagging",
            Pulley,
            "drive_pulley_lagging",
            Warning,
            "Lagged drive pulley recommended for wet or inclined applications",
            "validate_pulleys",
            57,
        ),
        row(
            "vp_snub_wrap",
            "Snub Roller Wrap",
            Pulley,
            "snub_roller",
            Warning,
            "Belt wrap angle below 180 degrees requires a snub roller",
            "validate_pulleys",
            70,
        ),
    ]
}

fn speed_rules() -> Vec<RuleRow> {
    use RuleCategory::Speed;
    use Severity::{Error, Info, Warning};
    vec![
        row(
            "vs_belt_speed_positive",
            "Belt Speed Positive",
            Speed,
            "belt_speed_fpm",
            Error,
            "Belt speed must be greater than 0",
            "validate_inputs",
            203,
        ),
        row(
            "vs_belt_speed_max",
            "Belt Speed Maximum",
            Speed,
            "belt_speed_fpm",
            Warning,
            "Belt speed above 300 FPM exceeds the recommended maximum",
            "validate_speed",
            22,
        ),
        row(
            "vs_throughput_unmet",
            "Throughput Achievable",
            Speed,
            "throughput_pph",
            Error,
            "Required throughput cannot be met at the selected belt speed",
            "validate_speed",
            37,
        ),
        row(
            "vs_part_spacing",
            "Part Spacing",
            Speed,
            "part_spacing_in",
            Warning,
            "Part spacing is less than part length and parts may touch",
            "validate_speed",
            49,
        ),
        row(
            "vs_speed_rounded",
            "Speed Rounded To Gearing",
            Speed,
            "belt_speed_fpm",
            Info,
            "Belt speed rounded to nearest available gear ratio",
            "calculate_drive",
            88,
        ),
    ]
}

fn drive_rules() -> Vec<RuleRow> {
    use RuleCategory::Drive;
    use Severity::{Error, Info, Warning};
    vec![
        row(
            "vd_motor_undersized",
            "Motor Power Sufficient",
            Drive,
            "motor_hp",
            Error,
            "Required horsepower exceeds selected motor rating",
            "validate_drive",
            24,
        ),
        row(
            "vd_motor_service_factor",
            "Motor Service Factor",
            Drive,
            "motor_hp",
            Warning,
            "Motor runs above 85 percent of rated horsepower",
            "validate_drive",
            39,
        ),
        row(
            "vd_gear_ratio_range",
            "Gear Ratio Range",
            Drive,
            "gear_ratio",
            Error,
            "Gear ratio outside the available gearbox range",
            "validate_drive",
            52,
        ),
        row(
            "vd_drive_location",
            "Drive Location",
            Drive,
            "drive_location",
            Warning,
            "Tail drive pushes the belt and is not recommended for long conveyors",
            "validate_drive",
            66,
        )
        .matching("Tail drive"),
        row(
            "vd_vfd_suggested",
            "VFD Suggested",
            Drive,
            "speed_control",
            Info,
            "Variable frequency drive suggested for adjustable speed",
            "validate_drive",
            79,
        ),
        row(
            "vd_voltage_required",
            "Supply Voltage Selected",
            Drive,
            "supply_voltage",
            Error,
            "Supply voltage must be selected",
            "validate_inputs",
            221,
        ),
    ]
}

fn material_rules() -> Vec<RuleRow> {
    use RuleCategory::Material;
    use Severity::{Error, Warning};
    vec![
        row(
            "vm_part_weight_positive",
            "Part Weight Positive",
            Material,
            "part_weight_lbs",
            Error,
            "Part weight must be greater than 0",
            "validate_inputs",
            236,
        ),
        row(
            "vm_load_capacity",
            "Belt Load Capacity",
            Material,
            "part_weight_lbs",
            Warning,
            "Load per foot exceeds belt rated capacity",
            "validate_material",
            18,
        ),
        row(
            "vm_part_length_positive",
            "Part Length Positive",
            Material,
            "part_length_in",
            Error,
            "Part length must be greater than 0",
            "validate_inputs",
            249,
        ),
        row(
            "vm_oily_product",
            "Oily Product",
            Material,
            "material_type",
            Warning,
            "Oily product requires oil-resistant belt compound",
            "validate_material",
            47,
        )
        .matching("oil"),
        row(
            "vm_sharp_edges",
            "Sharp Edged Product",
            Material,
            "product_surface",
            Warning,
            "Sharp or abrasive product requires cut-resistant belting",
            "validate_material",
            34,
        ),
    ]
}

fn safety_rules() -> Vec<RuleRow> {
    use RuleCategory::Safety;
    use Severity::{Error, Warning};
    vec![
        row(
            "vsf_guarding_required",
            "Pinch Point Guarding",
            Safety,
            "guard_type",
            Error,
            "Pinch point guarding is required when infeed height is below 84 inches",
            "validate_safety",
            21,
        ),
        row(
            "vsf_emergency_stop",
            "Emergency Stop",
            Safety,
            "emergency_stop",
            Error,
            "Emergency stop pull cord required for conveyors longer than 50 feet",
            "validate_safety",
            36,
        ),
        row(
            "vsf_side_rails",
            "Side Rails On Incline",
            Safety,
            "side_rail_height_in",
            Warning,
            "Side rails recommended on inclined conveyors to retain product",
            "validate_safety",
            50,
        ),
        row(
            "vsf_safety_margin",
            "Belt Tension Safety Margin",
            Safety,
            "belt_tension_lbs",
            Warning,
            "Effective belt tension leaves less than 20 percent safety margin",
            "validate_safety",
            63,
        ),
    ]
}

fn parameter_rules() -> Vec<RuleRow> {
    use RuleCategory::Parameter;
    use Severity::{Error, Info, Warning};
    vec![
        row(
            "vpa_quantity_positive",
            "Quantity Positive",
            Parameter,
            "quantity",
            Error,
            "Quantity must be at least 1",
            "validate_inputs",
            262,
        ),
        row(
            "vpa_leg_height",
            "Support Leg Height",
            Parameter,
            "leg_height_in",
            Warning,
            "Support leg height outside the adjustable range",
            "validate_parameters",
            16,
        ),
        row(
            "vpa_friction_default",
            "Friction Coefficient Default",
            Parameter,
            "friction_coefficient",
            Info,
            "Default friction coefficient used because none was provided",
            "calculate_drive",
            41,
        ),
        row(
            "vpa_friction_range",
            "Friction Coefficient Range",
            Parameter,
            "friction_coefficient",
            Error,
            "Friction coefficient must be between 0 and 1",
            "validate_parameters",
            29,
        ),
    ]
}

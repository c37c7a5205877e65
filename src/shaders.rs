//! WGSL sources for the water and flat-color pipelines.

use crate::wave::WaveField;

const WATER_SHADER_BODY: &str = include_str!("shaders/water.wgsl");

/// Shader for the ship hull and the skybox
pub const BASIC_SHADER: &str = include_str!("shaders/basic.wgsl");

/// Water shader with the wave functions generated from `wave`
pub fn water_shader_source(wave: &WaveField) -> String {
    format!("{}\n{}", wave.wgsl_functions(), WATER_SHADER_BODY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::WaveParams;

    fn parse_and_validate(source: &str) -> naga::Module {
        let module = naga::front::wgsl::parse_str(source).expect("shader should parse");
        naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::all(),
        )
        .validate(&module)
        .expect("shader should validate");
        module
    }

    fn entry_point_names(module: &naga::Module) -> Vec<&str> {
        module.entry_points.iter().map(|ep| ep.name.as_str()).collect()
    }

    #[test]
    fn test_water_shader_validates() {
        let module = parse_and_validate(&water_shader_source(&WaveField::default()));

        let names = entry_point_names(&module);
        assert!(names.contains(&"vs_main"));
        assert!(names.contains(&"fs_main"));

        let has_function = |name: &str| {
            module
                .functions
                .iter()
                .any(|(_, f)| f.name.as_deref() == Some(name))
        };
        assert!(has_function("wave_height"));
        assert!(has_function("wave_normal"));
    }

    #[test]
    fn test_water_shader_tracks_wave_params() {
        let wave = WaveField::new(WaveParams {
            amplitude_m: 0.5,
            frequency_x: 1.0,
            frequency_z: 4.0,
        });
        let source = water_shader_source(&wave);
        assert!(source.starts_with(&wave.wgsl_functions()));
        parse_and_validate(&source);
    }

    #[test]
    fn test_basic_shader_validates() {
        let module = parse_and_validate(BASIC_SHADER);
        assert_eq!(module.entry_points.len(), 2);
        assert_eq!(
            module.entry_points[0].stage,
            naga::ShaderStage::Vertex,
            "vertex stage comes first"
        );
    }
}

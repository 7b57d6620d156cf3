use std::str::FromStr;

use clap::ArgMatches;
use curvature_lib::InterpolationMode;
use nalgebra::{point, Point3, Vector3};

/// Parse all values of `key` as `T`
fn parse_values<T>(args: &ArgMatches, key: &str) -> Result<Vec<T>, String>
where
    T: FromStr,
{
    match args.values_of(key) {
        Some(values) => values
            .map(|v| v.parse::<T>().map_err(|_| format!("Cannot parse {key} value '{v}'")))
            .collect(),
        None => Ok(vec![]),
    }
}

fn parse_value<T>(args: &ArgMatches, key: &str) -> Result<Option<T>, String>
where
    T: FromStr,
{
    args.value_of(key)
        .map(|v| v.parse::<T>().map_err(|_| format!("Cannot parse {key} value '{v}'")))
        .transpose()
}

/// App configuration
/// Config is built from args parsed by `clap`
#[derive(Debug)]
pub struct Config {
    /// Dimensions of volume
    pub dims: Vector3<usize>,
    /// Type of generator to be used
    pub generator: GeneratorConfig,
    /// Mode used for probe samples
    pub interpolation: InterpolationMode,
    /// Construction threads, `None` for all cores
    pub threads: Option<usize>,
    /// Coordinates to sample
    pub probes: Vec<Point3<f32>>,
    /// Histogram resolution, `None` to skip histogram
    pub histogram: Option<(usize, usize)>,
    /// Optional seed for RNG, to replicate results
    pub seed: Option<u64>,
}

impl Config {
    pub fn from_args(args: &ArgMatches) -> Result<Config, String> {
        // Dims
        let dims = match parse_values::<usize>(args, "dims")?[..] {
            [x, y, z] => Vector3::new(x, y, z),
            _ => return Err("dims need exactly 3 values".into()),
        };
        // Generator
        let generator = GeneratorConfig::from_args(args)?;
        // Interpolation, has default value
        let interpolation = args
            .value_of("interpolation")
            .unwrap_or("nearest")
            .parse::<InterpolationName>()?
            .0;
        let threads = parse_value(args, "threads")?;
        // Probes, flattened triples
        let probe_values = parse_values::<f32>(args, "probe")?;
        if probe_values.len() % 3 != 0 {
            return Err("probe needs 3 values".into());
        }
        let probes = probe_values
            .chunks(3)
            .map(|c| point![c[0], c[1], c[2]])
            .collect();
        let histogram = match parse_values::<usize>(args, "histogram")?[..] {
            [] => None,
            [w, h] => Some((w, h)),
            _ => return Err("histogram needs 2 values".into()),
        };
        let seed = parse_value(args, "seed")?;

        Ok(Config {
            dims,
            generator,
            interpolation,
            threads,
            probes,
            histogram,
            seed,
        })
    }
}

/// Settings specific to generator variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeneratorConfig {
    /// Solid box with a padding of empty space
    Solid { sample: u8 },
    /// Intensity grows along x axis
    Ramp,
    /// Smooth blob in the centre
    Sphere,
    /// Randomly placed shapes
    Shapes {
        n_of_shapes: usize,
        sample: u8,
        obj_size: u32,
    },
}

impl GeneratorConfig {
    pub fn from_args(args: &ArgMatches) -> Result<GeneratorConfig, String> {
        let s = args.value_of("generator").ok_or("No generator")?;

        let sample = parse_value::<u8>(args, "sample")?;
        let n_of_shapes = parse_value::<usize>(args, "n-of-shapes")?;
        let obj_size = parse_value::<u32>(args, "object-size")?;

        let generator = match s.parse::<GeneratorType>()? {
            GeneratorType::Solid => GeneratorConfig::Solid {
                sample: sample.ok_or("solid generator needs --sample")?,
            },
            GeneratorType::Ramp => GeneratorConfig::Ramp,
            GeneratorType::Sphere => GeneratorConfig::Sphere,
            GeneratorType::Shapes => GeneratorConfig::Shapes {
                n_of_shapes: n_of_shapes.ok_or("shapes generator needs --n-of-shapes")?,
                sample: sample.ok_or("shapes generator needs --sample")?,
                obj_size: obj_size.ok_or("shapes generator needs --object-size")?,
            },
        };
        Ok(generator)
    }
}

#[derive(Debug, PartialEq)]
pub enum GeneratorType {
    Solid,
    Ramp,
    Sphere,
    Shapes,
}

impl FromStr for GeneratorType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(GeneratorType::Solid),
            "ramp" => Ok(GeneratorType::Ramp),
            "sphere" => Ok(GeneratorType::Sphere),
            "shapes" => Ok(GeneratorType::Shapes),
            _ => Err(format!("Unknown generator '{s}'")),
        }
    }
}

/// CLI name of an interpolation mode
pub struct InterpolationName(pub InterpolationMode);

impl FromStr for InterpolationName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InterpolationMode::ALL
            .into_iter()
            .find(|mode| mode.name() == s)
            .map(InterpolationName)
            .ok_or_else(|| format!("Unknown interpolation '{s}'"))
    }
}

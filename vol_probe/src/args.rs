//! Argument parsing and validation
//! Uses library `clap`

use clap::{Arg, Command};

// up to 32bit value
pub fn is_positive_number(num: &str) -> Result<(), String> {
    let n = num.parse::<u32>();
    match n {
        Ok(n) => {
            if n > 0 {
                Ok(())
            } else {
                Err("Number must be greater than 0".into())
            }
        }
        Err(_) => Err("Number required".into()),
    }
}

pub fn can_fit_u8(num: &str) -> Result<(), String> {
    let n = num.parse::<u8>();
    match n {
        Ok(_) => Ok(()),
        Err(_) => Err("Number does not fit in range <0;255>".into()),
    }
}

// any finite float, probes may lie outside the volume
pub fn is_float_number(num: &str) -> Result<(), String> {
    let n = num.parse::<f32>();
    match n {
        Ok(n) if n.is_finite() => Ok(()),
        Ok(_) => Err("Number must be finite".into()),
        Err(_) => Err("Number required".into()),
    }
}

pub const GENERATOR_NAMES: &[&str] = &["solid", "ramp", "sphere", "shapes"];
pub const INTERPOLATION_NAMES: &[&str] = &["nearest", "linear", "cubic"];

pub fn get_command<'a>() -> Command<'a> {
    Command::new("Vol-probe")
        .version("0.1.0")
        .about("Builds gradient and curvature volumes of a synthetic volume and reports on them")
        .arg(
            Arg::new("dims")
                .help("Dimensions of volume")
                .long("dims")
                .short('d')
                .required(true)
                .number_of_values(3)
                .value_names(&["X", "Y", "Z"])
                .use_value_delimiter(true)
                .require_value_delimiter(true)
                .require_equals(true)
                .validator(is_positive_number),
        )
        .arg(
            Arg::new("generator")
                .help("Type of generator")
                .long("generator")
                .short('g')
                .required(true)
                .requires_ifs(&[
                    ("solid", "sample"), // if solid is set, require option sample
                    ("shapes", "n-of-shapes"),
                    ("shapes", "sample"),
                    ("shapes", "object-size"),
                ])
                .takes_value(true)
                .value_name("NAME")
                .possible_values(GENERATOR_NAMES),
        )
        .arg(
            Arg::new("interpolation")
                .help("Interpolation used for probes")
                .long("interpolation")
                .short('i')
                .default_value("nearest")
                .value_name("MODE")
                .possible_values(INTERPOLATION_NAMES),
        )
        .arg(
            Arg::new("threads")
                .help("Construction threads, leave out to use all cores")
                .long("threads")
                .short('t')
                .value_name("N")
                .validator(is_positive_number),
        )
        .arg(
            Arg::new("seed")
                .help("Seed for RNG, leave out for random seed")
                .long("seed")
                .value_name("SEED")
                .validator(is_positive_number),
        )
        .arg(
            Arg::new("sample")
                .help("Value of generated object")
                .long("sample")
                .value_name("BYTE")
                .validator(|s| is_positive_number(s).and(can_fit_u8(s))),
        )
        .arg(
            Arg::new("object-size")
                .help("Size of individual generated objects")
                .long("object-size")
                .value_name("SIDE")
                .validator(is_positive_number),
        )
        .arg(
            Arg::new("n-of-shapes")
                .help("Number of shapes generated in volume")
                .long("n-of-shapes")
                .value_name("N")
                .validator(is_positive_number),
        )
        .arg(
            Arg::new("probe")
                .help("Coordinate to sample, can be repeated")
                .long("probe")
                .short('p')
                .multiple_occurrences(true)
                .number_of_values(3)
                .value_names(&["X", "Y", "Z"])
                .use_value_delimiter(true)
                .require_value_delimiter(true)
                .require_equals(true)
                .allow_hyphen_values(true)
                .validator(is_float_number),
        )
        .arg(
            Arg::new("histogram")
                .help("Print intensity / curvature histogram of given resolution")
                .long("histogram")
                .number_of_values(2)
                .value_names(&["W", "H"])
                .use_value_delimiter(true)
                .require_value_delimiter(true)
                .require_equals(true)
                .validator(is_positive_number),
        )
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn validators() {
        assert!(is_positive_number("12").is_ok());
        assert!(is_positive_number("0").is_err());
        assert!(is_positive_number("-3").is_err());
        assert!(can_fit_u8("255").is_ok());
        assert!(can_fit_u8("256").is_err());
        assert!(is_float_number("-1.5").is_ok());
        assert!(is_float_number("inf").is_err());
        assert!(is_float_number("x").is_err());
    }

    #[test]
    fn command_is_valid() {
        get_command().debug_assert();
    }
}

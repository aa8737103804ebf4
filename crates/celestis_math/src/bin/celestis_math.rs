use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use anyhow::bail;
    use celestis_math::{
        AnyVector, Rotation, Vector, Vector3,
        unit::{LengthUnit, MassUnit, SpeedUnit},
    };
    use clap::{Parser, Subcommand, ValueEnum};

    #[derive(Debug, Parser)]
    #[command(about = "The Celestis math library", long_about = None)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Parse a vector, quaternion or rotation and print it in canonical
        /// form
        Parse {
            /// Textual representation, e.g. `Vector3{x=1.0, y=2.0, z=3.0}`
            text: String,
        },
        /// Print the normalized form of a vector, quaternion or rotation
        Normalize {
            /// Textual representation of the value to normalize
            text: String,
        },
        /// Rotate a 3D vector by a rotation or a rotation quaternion
        Rotate {
            /// The `Vector3` to rotate
            #[arg(short, long)]
            vector: String,

            /// The `Rotation` or `Quaternion` to rotate by
            #[arg(short, long)]
            by: String,
        },
        /// Convert a value between units of the same kind
        Convert {
            /// Kind of quantity
            #[arg(short, long, value_enum)]
            kind: UnitKind,

            /// Unit of the given value
            #[arg(long)]
            from: String,

            /// Unit to convert to
            #[arg(long)]
            to: String,

            /// Value to convert
            #[arg(allow_negative_numbers = true)]
            value: f64,
        },
    }

    #[derive(Clone, Copy, Debug, ValueEnum)]
    enum UnitKind {
        Length,
        Mass,
        Speed,
    }

    pub fn main() -> Result<()> {
        env_logger::init();

        let cli = Cli::parse();

        match cli.command {
            Command::Parse { text } => {
                let value: AnyVector = text.parse()?;
                log::debug!("Parsed {}", value.type_name());
                println!("{value}");
                match value {
                    AnyVector::Vector2(v) => println!("magnitude = {}", v.magnitude()),
                    AnyVector::Vector3(v) => println!("magnitude = {}", v.magnitude()),
                    AnyVector::Vector4(v) => println!("magnitude = {}", v.magnitude()),
                    AnyVector::Quaternion(q) => println!("magnitude = {}", q.magnitude()),
                    AnyVector::Rotation(r) => println!("degrees = {}", r.degrees()),
                }
            }
            Command::Normalize { text } => {
                let normalized = match text.parse::<AnyVector>()? {
                    AnyVector::Vector2(v) => AnyVector::from(v.normalize()?),
                    AnyVector::Vector3(v) => AnyVector::from(v.normalize()?),
                    AnyVector::Vector4(v) => AnyVector::from(v.normalize()?),
                    AnyVector::Quaternion(q) => AnyVector::from(q.normalize()?),
                    AnyVector::Rotation(r) => {
                        AnyVector::from(Rotation::from_axis_angle(&r.axis()?, r.angle())?)
                    }
                };
                println!("{normalized}");
            }
            Command::Rotate { vector, by } => {
                let vector: Vector3 = vector.parse()?;
                let rotated = match by.parse::<AnyVector>()? {
                    AnyVector::Rotation(rotation) => vector.rotate(&rotation)?,
                    AnyVector::Quaternion(quaternion) => vector.rotate_by_quaternion(&quaternion)?,
                    other => bail!("Cannot rotate by a {}", other.type_name()),
                };
                println!("{rotated}");
            }
            Command::Convert {
                kind,
                from,
                to,
                value,
            } => {
                let converted = match kind {
                    UnitKind::Length => {
                        to.parse::<LengthUnit>()?.convert(from.parse()?, value)
                    }
                    UnitKind::Mass => to.parse::<MassUnit>()?.convert(from.parse()?, value),
                    UnitKind::Speed => to.parse::<SpeedUnit>()?.convert(from.parse()?, value),
                };
                println!("{converted} {to}");
            }
        }
        Ok(())
    }
}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}

//! Per-condition input deck generation.
//!
//! A campaign file lists the temperature and pressure grids. For each
//! `(T, P)` pair this module creates the condition directory, renders the
//! run script, and copies the engine's fixed auxiliary inputs next to it.
//! Everything is an explicit function of the campaign, root, and assets
//! paths; nothing happens at load time.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::model::condition::ConditionKey;

// Campaign pressures are in bar; LAMMPS `real` units expect atmospheres.
const BAR_TO_ATM: f64 = 0.986923;

/// Files copied verbatim into every condition directory.
pub const DEFAULT_AUX_FILES: [&str; 6] = [
    "system.in.init",
    "system.in.settings",
    "system.data",
    "diffusivity_msd.in.prop",
    "viscosity.in.prop",
    "submit.sh",
];

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("failed to parse campaign file: {0}")]
    Config(#[from] toml::de::Error),

    #[error("campaign lists no {0}")]
    EmptyGrid(&'static str),

    #[error("auxiliary input '{}' not found in the assets directory", path.display())]
    MissingAux { path: PathBuf },
}

/// The `(T, P)` grid and layout of one simulation campaign.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Campaign {
    /// Temperatures in kelvin.
    pub temperatures: Vec<u32>,
    /// Pressures in bar.
    pub pressures: Vec<u32>,
    /// Directory the condition directories are created under.
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,
    /// Engine input files copied into every condition directory.
    #[serde(default = "default_aux_files")]
    pub aux_files: Vec<PathBuf>,
}

fn default_base_dir() -> PathBuf {
    PathBuf::from("simulations")
}

fn default_aux_files() -> Vec<PathBuf> {
    DEFAULT_AUX_FILES.iter().map(PathBuf::from).collect()
}

impl Campaign {
    pub fn from_toml(text: &str) -> Result<Self, Error> {
        let campaign: Campaign = toml::from_str(text)?;
        if campaign.temperatures.is_empty() {
            return Err(Error::EmptyGrid("temperatures"));
        }
        if campaign.pressures.is_empty() {
            return Err(Error::EmptyGrid("pressures"));
        }
        Ok(campaign)
    }

    /// The full `(T, P)` grid, temperature-major.
    pub fn conditions(&self) -> Vec<ConditionKey> {
        self.temperatures
            .iter()
            .flat_map(|&t| self.pressures.iter().map(move |&p| ConditionKey::new(t, p)))
            .collect()
    }
}

/// Creates every condition directory under `root`, with its rendered run
/// script and the auxiliary files taken from `assets`.
///
/// Auxiliary files are checked up front so a typo fails before any
/// directory is half-built. Returns the directories created.
pub fn generate(campaign: &Campaign, root: &Path, assets: &Path) -> Result<Vec<PathBuf>, Error> {
    for aux in &campaign.aux_files {
        if !assets.join(aux).is_file() {
            return Err(Error::MissingAux { path: aux.clone() });
        }
    }

    let base = root.join(&campaign.base_dir);
    fs::create_dir_all(&base)?;

    let mut created = Vec::new();
    for key in campaign.conditions() {
        let dir = base.join(key.dir_name());
        fs::create_dir_all(&dir)?;
        fs::write(dir.join("run.lmp"), render_run_script(&key))?;
        for aux in &campaign.aux_files {
            fs::copy(assets.join(aux), dir.join(aux))?;
        }
        created.push(dir);
    }
    Ok(created)
}

// `@TEMP@` and `@PRESS@` are filled in per condition; `${...}` and `$(...)`
// are LAMMPS variable syntax and pass through untouched. The fix IDs double
// as output file names, which is what the post-processing scanner looks for.
const RUN_SCRIPT: &str = r##"variable        temp equal @TEMP@
variable        press equal @PRESS@

boundary        p p p

include         "system.in.init"
read_data       "system.data"
include         "system.in.settings"

group           water type 7 8
neighbor        2.0 bin
neigh_modify    every 1 delay 10 check yes

write_data      initial_config.data

velocity        all create ${temp} 54654
variable        dt equal 1
timestep        1

thermo_style    custom step time temp press pe ke etotal enthalpy atoms lx ly lz vol density
thermo          1000

# NVT equilibration
velocity        water create ${temp} 3125 loop local dist gaussian
fix             md_nvt water nvt temp ${temp} ${temp} $(100.0*dt)

run             1000000

unfix           md_nvt

# NPT production
fix             md_npt water npt temp ${temp} ${temp} $(100.0*dt) iso ${press} ${press} $(1000.0*dt)

variable        s equal 10
variable        p equal 100
variable        d equal $s*$p

variable        time equal time
variable        Vout equal vol
variable        Pout equal press
variable        Tout equal temp
variable        Hout equal enthalpy
variable        PEout equal pe
variable        KEout equal ke
variable        ETOTout equal etotal
variable        massDensity equal density

fix             GlobalPropsTimeAvg all ave/time $s $p $d v_Pout v_Tout v_Vout v_Hout v_PEout v_KEout v_ETOTout v_massDensity file GlobalPropsTimeAvg.prop

include         diffusivity_msd.in.prop
include         viscosity.in.prop

fix             GlobalPropCalculated all print $d "time:${time}, D[H2O]:${D_H2O}, viscosity:${vis}" file GlobalPropCalculated.prop screen no

compute         myRDF all rdf 200 7 7 8 8 7 8
fix             rdfOut all ave/time $s $p $d c_myRDF[*] file rdf_all.rdf mode vector

run             5000000

unfix           md_npt
"##;

fn render_run_script(key: &ConditionKey) -> String {
    let press_atm = f64::from(key.pressure) * BAR_TO_ATM;
    RUN_SCRIPT
        .replace("@TEMP@", &key.temperature.to_string())
        .replace("@PRESS@", &format!("{press_atm:.6}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MINIMAL_CAMPAIGN: &str = r#"
temperatures = [313, 323]
pressures = [1, 10]
base_dir = "runs"
aux_files = ["system.data"]
"#;

    #[test]
    fn parses_a_campaign_with_defaults() {
        let campaign = Campaign::from_toml("temperatures = [313]\npressures = [1]\n").unwrap();
        assert_eq!(campaign.base_dir, PathBuf::from("simulations"));
        assert_eq!(campaign.aux_files.len(), DEFAULT_AUX_FILES.len());
    }

    #[test]
    fn rejects_empty_grids_and_unknown_keys() {
        assert!(matches!(
            Campaign::from_toml("temperatures = []\npressures = [1]\n").unwrap_err(),
            Error::EmptyGrid("temperatures")
        ));
        assert!(matches!(
            Campaign::from_toml("temperatures = [313]\npressures = []\n").unwrap_err(),
            Error::EmptyGrid("pressures")
        ));
        assert!(matches!(
            Campaign::from_toml("temperatures = [313]\npressures = [1]\ntypo = 1\n").unwrap_err(),
            Error::Config(_)
        ));
    }

    #[test]
    fn conditions_cover_the_grid_temperature_major() {
        let campaign = Campaign::from_toml(MINIMAL_CAMPAIGN).unwrap();
        assert_eq!(
            campaign.conditions(),
            vec![
                ConditionKey::new(313, 1),
                ConditionKey::new(313, 10),
                ConditionKey::new(323, 1),
                ConditionKey::new(323, 10),
            ]
        );
    }

    #[test]
    fn rendered_script_pins_temperature_and_converted_pressure() {
        let script = render_run_script(&ConditionKey::new(313, 10));
        assert!(script.contains("variable        temp equal 313\n"));
        assert!(script.contains("variable        press equal 9.869230\n"));
        assert!(!script.contains("@TEMP@"));
        assert!(!script.contains("@PRESS@"));
    }

    #[test]
    fn generate_builds_every_condition_directory() {
        let assets = TempDir::new().unwrap();
        fs::write(assets.path().join("system.data"), "data\n").unwrap();
        let root = TempDir::new().unwrap();

        let campaign = Campaign::from_toml(MINIMAL_CAMPAIGN).unwrap();
        let created = generate(&campaign, root.path(), assets.path()).unwrap();
        assert_eq!(created.len(), 4);

        let run_dir = root.path().join("runs/T_313_P_1");
        assert!(run_dir.join("run.lmp").is_file());
        assert!(run_dir.join("system.data").is_file());

        let script = fs::read_to_string(run_dir.join("run.lmp")).unwrap();
        assert!(script.contains("variable        press equal 0.986923\n"));
    }

    #[test]
    fn missing_auxiliary_file_fails_before_creating_anything() {
        let assets = TempDir::new().unwrap();
        let root = TempDir::new().unwrap();

        let campaign = Campaign::from_toml(MINIMAL_CAMPAIGN).unwrap();
        let err = generate(&campaign, root.path(), assets.path()).unwrap_err();
        assert!(matches!(err, Error::MissingAux { .. }));
        assert!(!root.path().join("runs").exists());
    }
}

//! Command-Line Interface

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Mimic - retarget mocap recordings onto an articulated robot
#[derive(Parser, Debug)]
#[command(name = "mimic")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract joint rotations from a BVH recording into the intermediate
    /// motion file
    Extract {
        /// Input BVH recording
        input: PathBuf,

        /// Output motion file
        #[arg(short, long, default_value = "human_dance_poses.json")]
        output: PathBuf,
    },

    /// Retarget an extracted motion file onto a robot model
    Retarget {
        /// Robot model description (URDF); resolved via the model search
        /// path when not found as given
        #[arg(short, long)]
        model: PathBuf,

        /// Input motion file
        #[arg(short, long, default_value = "human_dance_poses.json")]
        input: PathBuf,

        /// Output trajectory file
        #[arg(short, long, default_value = "robot_dance_poses.json")]
        output: PathBuf,
    },

    /// Run both stages: BVH in, robot trajectory out
    Run {
        /// Input BVH recording
        input: PathBuf,

        /// Robot model description (URDF)
        #[arg(short, long)]
        model: PathBuf,

        /// Intermediate motion file written between the stages
        #[arg(long, default_value = "human_dance_poses.json")]
        poses: PathBuf,

        /// Output trajectory file
        #[arg(short, long, default_value = "robot_dance_poses.json")]
        output: PathBuf,
    },

    /// View configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the config file path
    Path,

    /// Write a default config file
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn parse_extract_with_defaults() {
        let cli = Cli::try_parse_from(["mimic", "extract", "dance1.bvh"]).unwrap();
        match cli.command {
            Commands::Extract { input, output } => {
                assert_eq!(input, PathBuf::from("dance1.bvh"));
                assert_eq!(output, PathBuf::from("human_dance_poses.json"));
            }
            _ => panic!("Expected Extract command"),
        }
    }

    #[test]
    fn parse_retarget_with_all_options() {
        let cli = Cli::try_parse_from([
            "mimic",
            "retarget",
            "--model",
            "anymal.urdf",
            "--input",
            "poses.json",
            "--output",
            "robot.json",
        ])
        .unwrap();
        match cli.command {
            Commands::Retarget {
                model,
                input,
                output,
            } => {
                assert_eq!(model, PathBuf::from("anymal.urdf"));
                assert_eq!(input, PathBuf::from("poses.json"));
                assert_eq!(output, PathBuf::from("robot.json"));
            }
            _ => panic!("Expected Retarget command"),
        }
    }

    #[test]
    fn parse_retarget_defaults() {
        let cli = Cli::try_parse_from(["mimic", "retarget", "-m", "anymal.urdf"]).unwrap();
        match cli.command {
            Commands::Retarget { input, output, .. } => {
                assert_eq!(input, PathBuf::from("human_dance_poses.json"));
                assert_eq!(output, PathBuf::from("robot_dance_poses.json"));
            }
            _ => panic!("Expected Retarget command"),
        }
    }

    #[test]
    fn retarget_requires_a_model() {
        let result = Cli::try_parse_from(["mimic", "retarget"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_run_command() {
        let cli =
            Cli::try_parse_from(["mimic", "run", "dance1.bvh", "--model", "anymal.urdf"]).unwrap();
        match cli.command {
            Commands::Run {
                input,
                model,
                poses,
                output,
            } => {
                assert_eq!(input, PathBuf::from("dance1.bvh"));
                assert_eq!(model, PathBuf::from("anymal.urdf"));
                assert_eq!(poses, PathBuf::from("human_dance_poses.json"));
                assert_eq!(output, PathBuf::from("robot_dance_poses.json"));
            }
            _ => panic!("Expected Run command"),
        }
    }

    #[test]
    fn parse_config_show() {
        let cli = Cli::try_parse_from(["mimic", "config", "show"]).unwrap();
        match cli.command {
            Commands::Config {
                action: ConfigAction::Show,
            } => {}
            _ => panic!("Expected Config Show"),
        }
    }

    #[test]
    fn parse_config_init_defaults() {
        let cli = Cli::try_parse_from(["mimic", "config", "init"]).unwrap();
        match cli.command {
            Commands::Config {
                action: ConfigAction::Init { force },
            } => assert!(!force),
            _ => panic!("Expected Config Init"),
        }
    }

    #[test]
    fn global_verbose_flag() {
        let cli = Cli::try_parse_from(["mimic", "-v", "extract", "dance1.bvh"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn invalid_command_fails() {
        assert!(Cli::try_parse_from(["mimic", "teleport"]).is_err());
    }

    #[test]
    fn verify_command_structure() {
        let cmd = Cli::command();
        let subcommands: Vec<_> = cmd.get_subcommands().map(|s| s.get_name()).collect();
        assert!(subcommands.contains(&"extract"));
        assert!(subcommands.contains(&"retarget"));
        assert!(subcommands.contains(&"run"));
        assert!(subcommands.contains(&"config"));
    }
}

use shrinkray_scaler::{
    CONFIG_FILE_NAME, ENT_SUFFIX, RIG_SUFFIX, load_config, scale_ent_file, scale_rig_file,
    validate_suffix,
};
use std::env;
use std::path::{Path, PathBuf};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();

    let args: Vec<String> = env::args().collect();
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    if args.len() < 3 {
        print_usage();
        std::process::exit(1);
    }

    if let Err(err) = dispatch(&args, &cwd) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn dispatch(args: &[String], cwd: &Path) -> Result<(), String> {
    match args[1].to_ascii_lowercase().as_str() {
        "rig" => rig_command(args, cwd),
        "ent" => ent_command(args, cwd),
        "both" => both_command(args, cwd),
        _ => {
            print_usage();
            Err(format!("unknown command `{}`", args[1]))
        }
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  shrinkray_cli rig <file.rig.json> <scale>");
    eprintln!("  shrinkray_cli ent <file.ent.json> <scale>");
    eprintln!("  shrinkray_cli both <rig_file.rig.json> <ent_file.ent.json> <scale>");
    eprintln!();
    eprintln!("Example:");
    eprintln!("  shrinkray_cli rig mch_005__militech_cerberus.rig.json 0.33");
}

fn parse_scale(raw: &str) -> Result<f64, String> {
    raw.parse::<f64>()
        .map_err(|_| format!("invalid scale value `{raw}`"))
}

fn rig_command(args: &[String], cwd: &Path) -> Result<(), String> {
    if args.len() != 4 {
        return Err("for `rig`, provide: <file.rig.json> <scale>".to_string());
    }
    let filename = &args[2];
    let factor = parse_scale(&args[3])?;
    validate_suffix(filename, RIG_SUFFIX).map_err(|err| err.to_string())?;

    let config = load_config(cwd)
        .map_err(|err| format!("failed to load {CONFIG_FILE_NAME}: {err}"))?;
    let output = scale_rig_file(Path::new(filename), factor, &config)
        .map_err(|err| format!("failed to scale {filename}: {err}"))?;

    println!("scaled `{filename}` by {factor} -> {}", output.display());
    Ok(())
}

fn ent_command(args: &[String], cwd: &Path) -> Result<(), String> {
    if args.len() != 4 {
        return Err("for `ent`, provide: <file.ent.json> <scale>".to_string());
    }
    let filename = &args[2];
    let factor = parse_scale(&args[3])?;
    validate_suffix(filename, ENT_SUFFIX).map_err(|err| err.to_string())?;

    let config = load_config(cwd)
        .map_err(|err| format!("failed to load {CONFIG_FILE_NAME}: {err}"))?;
    let output = scale_ent_file(Path::new(filename), factor, &config)
        .map_err(|err| format!("failed to scale {filename}: {err}"))?;

    println!("scaled `{filename}` by {factor} -> {}", output.display());
    Ok(())
}

fn both_command(args: &[String], cwd: &Path) -> Result<(), String> {
    if args.len() != 5 {
        return Err("for `both`, provide: <file.rig.json> <file.ent.json> <scale>".to_string());
    }
    let rig_filename = &args[2];
    let ent_filename = &args[3];
    // Both filenames are checked before either document is scaled.
    validate_suffix(rig_filename, RIG_SUFFIX).map_err(|err| err.to_string())?;
    validate_suffix(ent_filename, ENT_SUFFIX).map_err(|err| err.to_string())?;
    let factor = parse_scale(&args[4])?;

    let config = load_config(cwd)
        .map_err(|err| format!("failed to load {CONFIG_FILE_NAME}: {err}"))?;

    let rig_output = scale_rig_file(Path::new(rig_filename), factor, &config)
        .map_err(|err| format!("failed to scale {rig_filename}: {err}"))?;
    println!("scaled `{rig_filename}` by {factor} -> {}", rig_output.display());

    let ent_output = scale_ent_file(Path::new(ent_filename), factor, &config)
        .map_err(|err| format!("failed to scale {ent_filename}: {err}"))?;
    println!("scaled `{ent_filename}` by {factor} -> {}", ent_output.display());

    Ok(())
}

mod config;
mod export;

use std::error::Error;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use terrace_field::{HeightSource, load_height_texture, sample, save_height_texture};
use terrace_mesh::{MeshBuffers, build_mesh, build_mesh_par};

use crate::config::{TerrainConfig, load_config_from_path};

#[derive(Parser, Debug)]
#[command(name = "terrace", version, about = "Stepped cuboid terrain from height textures")]
struct Cli {
    /// TOML config file (built-in defaults when omitted)
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Author a Perlin noise height texture
    Noise(NoiseArgs),
    /// Build a terrain mesh from a height texture
    Mesh(MeshArgs),
}

#[derive(Args, Debug)]
struct NoiseArgs {
    /// Override the configured seed
    #[arg(long, conflicts_with = "random_seed")]
    seed: Option<i32>,
    /// Pick a fresh seed in [0, 999999]
    #[arg(long)]
    random_seed: bool,
    /// Output PNG path (defaults to a name derived from the noise settings)
    #[arg(long, short)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct MeshArgs {
    /// Height texture to sample (fresh Perlin noise from config when omitted)
    #[arg(long, short)]
    input: Option<PathBuf>,
    /// Write the mesh as Wavefront OBJ
    #[arg(long)]
    obj: Option<PathBuf>,
    /// Assemble rows on the thread pool
    #[arg(long)]
    parallel: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let cfg = match &cli.config {
        Some(path) => load_config_from_path(path)?,
        None => TerrainConfig::default(),
    };

    match cli.command {
        Command::Noise(args) => run_noise(&cfg, args),
        Command::Mesh(args) => run_mesh(&cfg, args),
    }
}

fn run_noise(cfg: &TerrainConfig, args: NoiseArgs) -> Result<(), Box<dyn Error>> {
    let mut noise = cfg.perlin();
    if let Some(seed) = args.seed {
        noise.seed = seed;
    }
    if args.random_seed {
        noise.randomize_seed();
    }
    let map = noise.generate()?;
    let out = args.out.unwrap_or_else(|| PathBuf::from(noise.file_name()));
    save_height_texture(&map, &out)?;
    log::info!("noise seed {} -> {}", noise.seed, out.display());
    Ok(())
}

fn run_mesh(cfg: &TerrainConfig, args: MeshArgs) -> Result<(), Box<dyn Error>> {
    let grid = match &args.input {
        Some(path) => {
            let img = load_height_texture(path)?;
            sample(&img, &cfg.sample_params())?
        }
        None => {
            let map = cfg.perlin().generate()?;
            log::info!("no input texture; sampling {}x{} perlin noise", map.width(), map.height());
            sample(&map, &cfg.sample_params())?
        }
    };

    let params = cfg.mesh_params();
    let mesh: MeshBuffers = if args.parallel {
        build_mesh_par(&grid, &params)?
    } else {
        build_mesh(&grid, &params)?
    };

    log::info!(
        "{}x{} tiles -> {} quads, {} vertices, {} triangles",
        grid.width(),
        grid.depth(),
        mesh.quad_count(),
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    if let Some(b) = mesh.bounds() {
        log::info!(
            "bounds min ({:.2}, {:.2}, {:.2}) max ({:.2}, {:.2}, {:.2})",
            b.min.x,
            b.min.y,
            b.min.z,
            b.max.x,
            b.max.y,
            b.max.z
        );
    }
    if let Some(path) = &args.obj {
        export::save_obj(&mesh, path)?;
    }
    Ok(())
}

use pmverif::prelude::*;
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "linear_materials_parallel_1d",
    about = "Computes the analytical head of the steady flow through two materials in parallel"
)]
struct Options {
    /// Simulation input document (XML parameter list or JSON) with the parameters
    #[structopt(long, conflicts_with = "param")]
    document: Option<String>,

    /// Flat JSON file with some parameters, e.g. {"h_0": 10.0, "h_L": 0.0}; missing ones take the defaults
    #[structopt(long)]
    param: Option<String>,

    /// Head values (JSON) computed by a numerical simulator to be verified
    #[structopt(long)]
    observations: Option<String>,

    /// Tolerance on the head difference when verifying the observations
    #[structopt(long, default_value = "1e-6")]
    tol: f64,

    /// Directory to save the figure
    #[structopt(long)]
    out_dir: Option<String>,

    /// Skips the generation of the figure
    #[structopt(long)]
    no_plot: bool,
}

fn main() -> Result<(), StrError> {
    // parse options
    let options = Options::from_args();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // analytical model
    let model = match (&options.document, &options.param) {
        (Some(path), _) => HeadModel::from_document(path)?,
        (None, Some(path)) => HeadModel::new(&ParamHead::read_json(path)?)?,
        (None, None) => HeadModel::new_default()?,
    };

    // parameters
    let param = model.param();
    for name in PARAM_HEAD_NAMES {
        if let Some(value) = param.get(name) {
            println!("{:>6} = {:e}", name, value);
        }
    }

    // head along two horizontal lines
    let np = 11;
    let (xx, hh_a) = model.sample(np, 3.0);
    let (_, hh_b) = model.sample(np, 7.0);

    // table
    let thin_line = format!("{:─^1$}", "", 39);
    println!("{}", thin_line);
    println!("{:>13}{:>13}{:>13}", "x", "h(x, z=3)", "h(x, z=7)");
    println!("{}", thin_line);
    for i in 0..np {
        println!("{:>13.4}{:>13.6}{:>13.6}", xx[i], hh_a[i], hh_b[i]);
    }
    println!("{}", thin_line);
    let (kk1, kk2) = model.conductivities();
    println!("K1 = {:e} m/s, K2 = {:e} m/s", kk1, kk2);

    // figure
    if !options.no_plot {
        let path = FilePath::svg("linear_materials_parallel_1d", options.out_dir.as_deref());
        plot_head(&xx, &[("z = 3", &hh_a[..]), ("z = 7", &hh_b[..])], &path)?;
        log::info!("figure saved to {:?}", path);
    }

    // verification
    if let Some(path) = &options.observations {
        let observations = HeadObservations::read_json(path)?;
        let (all_good, diff_max) = compare_head(&model, &observations, options.tol, 2)?;
        if !all_good {
            log::error!("max head difference {:e} exceeds {:e}", diff_max, options.tol);
            return Err("numerical head does not match the analytical solution");
        }
        println!("numerical head matches the analytical solution");
    }
    Ok(())
}

use anyhow::{Context, Result, bail};

use skeleton_forge::io::{Format, GraphReader, MoleculeWriter};
use skeleton_forge::{LogSink, Molecule, SkeletonGraph, build};

use crate::cli::Cli;
use crate::config::build_config;
use crate::display::{Context as DisplayContext, Progress, print_molecule_info};
use crate::io::{OutputSpec, create_output, infer_output_format, open_input, stdin_is_tty};

const TOTAL_STEPS: u8 = 3;

pub fn run_build(cli: Cli, ctx: DisplayContext) -> Result<()> {
    if cli.io.input.is_none() && stdin_is_tty() {
        bail!(
            "No input file specified and stdin is a terminal.\n\nUsage: sforge -i <GRAPH> or pipe a skeleton graph via stdin."
        );
    }

    let output_specs = resolve_outputs(&cli)?;

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading skeleton graph");
    let graph = read_graph(&cli)?;
    let read_substeps = [
        format!("{} nodes", graph.node_count()),
        format!("{} edges", graph.edge_count()),
    ];
    let read_substeps_ref: Vec<&str> = read_substeps.iter().map(|s| s.as_str()).collect();
    progress.complete_step("Reading skeleton graph", &read_substeps_ref);

    progress.step("Reconstructing 3-D geometry");
    let config = build_config(&cli.geometry)?;
    let molecule = build(&graph, &config, &mut LogSink).context("Reconstruction failed")?;
    let build_substeps = build_reconstruct_substeps(&molecule);
    let build_substeps_ref: Vec<&str> = build_substeps.iter().map(|s| s.as_str()).collect();
    progress.complete_step("Reconstructing 3-D geometry", &build_substeps_ref);

    if ctx.interactive {
        print_molecule_info(&molecule);
    }

    progress.step("Writing output");
    write_outputs(&molecule, &output_specs)?;
    let write_substeps = build_write_substeps(&output_specs);
    let write_substeps_ref: Vec<&str> = write_substeps.iter().map(|s| s.as_str()).collect();
    progress.complete_step("Writing output", &write_substeps_ref);

    progress.finish();

    Ok(())
}

fn build_reconstruct_substeps(molecule: &Molecule) -> Vec<String> {
    vec![
        "Center barycenter at origin".to_string(),
        "Scale reference bond to canonical length".to_string(),
        format!(
            "Complete valences ({} hydrogens added)",
            molecule.hydrogen_count()
        ),
    ]
}

fn build_write_substeps(specs: &[OutputSpec]) -> Vec<String> {
    specs
        .iter()
        .map(|spec| {
            let path_str = spec
                .path
                .as_ref()
                .map(|p| {
                    p.file_name()
                        .unwrap_or_default()
                        .to_string_lossy()
                        .into_owned()
                })
                .unwrap_or_else(|| "stdout".to_string());
            format!("Write {} → {}", spec.format, path_str)
        })
        .collect()
}

fn resolve_outputs(cli: &Cli) -> Result<Vec<OutputSpec>> {
    if cli.io.output.is_empty() {
        let format = cli.output_format.map(|f| f.into()).unwrap_or(Format::Xyz);
        return Ok(vec![OutputSpec { path: None, format }]);
    }

    let mut specs = Vec::with_capacity(cli.io.output.len());

    let first = &cli.io.output[0];
    let first_format = if let Some(fmt) = cli.output_format {
        fmt.into()
    } else if let Some(fmt) = infer_output_format(first) {
        fmt
    } else {
        bail!(
            "Cannot infer format from '{}'. Use --outfmt to specify.",
            first.display()
        );
    };
    specs.push(OutputSpec {
        path: Some(first.clone()),
        format: first_format,
    });

    for path in &cli.io.output[1..] {
        let format = infer_output_format(path).ok_or_else(|| {
            anyhow::anyhow!(
                "Cannot infer format from '{}'. Use explicit extension.",
                path.display()
            )
        })?;
        specs.push(OutputSpec {
            path: Some(path.clone()),
            format,
        });
    }

    Ok(specs)
}

fn read_graph(cli: &Cli) -> Result<SkeletonGraph> {
    let input = open_input(cli.io.input.as_deref())?;
    GraphReader::new(input, Format::Graph)
        .read()
        .context("Failed to read skeleton graph")
}

fn write_outputs(molecule: &Molecule, specs: &[OutputSpec]) -> Result<()> {
    for spec in specs {
        let writer = create_output(spec.path.as_deref())?;
        MoleculeWriter::new(writer, spec.format)
            .write(molecule)
            .with_context(|| format!("Failed to write {} output", spec.format))?;
    }

    Ok(())
}

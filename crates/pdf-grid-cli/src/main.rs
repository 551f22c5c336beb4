use anyhow::{Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use pdf_grid::{GridConfig, GridStatistics, PageSize};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gridpdf", about = "Tile one image across a printable grid", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a grid PDF from an image
    Generate {
        /// Input image file (PNG, JPEG, GIF, WebP, ...)
        #[arg(short, long)]
        image: PathBuf,

        /// Output PDF file or directory (defaults to grid_{c}x{r}_{n}pcs.pdf)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of columns (1-10)
        #[arg(long, default_value = "4")]
        columns: u32,

        /// Number of rows (1-10)
        #[arg(long, default_value = "5")]
        rows: u32,

        /// Page margin in mm (all four sides)
        #[arg(long, default_value = "10")]
        margin: f32,

        /// Share of the cell the image may fill, in percent (10-100)
        #[arg(long, default_value = "95")]
        scale: u32,

        /// Page size preset
        #[arg(long, default_value = "a4", value_enum)]
        page: PageArg,

        /// Custom page width in mm (overrides the preset)
        #[arg(long)]
        width: Option<f32>,

        /// Custom page height in mm (overrides the preset)
        #[arg(long)]
        height: Option<f32>,

        /// Show statistics only, don't generate PDF
        #[arg(long)]
        stats_only: bool,
    },

    /// List the page size presets
    Presets,
}

#[derive(Clone, Copy, ValueEnum)]
enum PageArg {
    A4,
    Letter,
    Legal,
    A5,
    A3,
}

impl From<PageArg> for PageSize {
    fn from(arg: PageArg) -> Self {
        match arg {
            PageArg::A4 => Self::A4,
            PageArg::Letter => Self::Letter,
            PageArg::Legal => Self::Legal,
            PageArg::A5 => Self::A5,
            PageArg::A3 => Self::A3,
        }
    }
}

fn build_config(
    columns: u32,
    rows: u32,
    margin: f32,
    scale: u32,
    page: PageArg,
    width: Option<f32>,
    height: Option<f32>,
) -> Result<GridConfig> {
    let mut config = GridConfig::default();
    config.select_page_size(page.into());
    config.set_columns(columns);
    config.set_rows(rows);
    config.set_image_scale(scale);

    if !margin.is_finite() || margin < 0.0 {
        bail!("Margin must be a non-negative number of millimeters, got {}", margin);
    }
    config.set_margin(margin);

    if let Some(width) = width {
        if !config.set_page_width(width) {
            bail!("Page width must be positive, got {}", width);
        }
    }
    if let Some(height) = height {
        if !config.set_page_height(height) {
            bail!("Page height must be positive, got {}", height);
        }
    }

    config.validate()?;
    Ok(config)
}

fn print_statistics(stats: &GridStatistics) {
    println!("Grid Statistics:");
    println!("  Page: {} ({})", stats.page_label(), stats.orientation.name());
    println!("  Grid: {} x {}", stats.columns, stats.rows);
    println!("  Images: {}", stats.total_images);
    println!("  Cell size: {} mm", stats.cell_size_label());
    if let Some(size) = stats.draw_size {
        println!("  Image size: {:.1} × {:.1} mm", size.width, size.height);
    }
    println!(
        "  Cut lines: {} vertical, {} horizontal",
        stats.vertical_cut_lines, stats.horizontal_cut_lines
    );
    println!("  Output file: {}", stats.output_filename);
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            image,
            output,
            columns,
            rows,
            margin,
            scale,
            page,
            width,
            height,
            stats_only,
        } => {
            let config = build_config(columns, rows, margin, scale, page, width, height)?;

            let loaded = pdf_grid::load_image(&image).await?;
            println!(
                "Loaded {} ({}x{} px, {})",
                loaded.name,
                loaded.width,
                loaded.height,
                loaded.media_type()
            );

            let stats = pdf_grid::calculate_statistics(&config, Some(&loaded))?;
            print_statistics(&stats);

            if stats_only {
                return Ok(());
            }

            let target = output.unwrap_or_else(|| PathBuf::from("."));
            let path = pdf_grid::export_to_file(&loaded, &config, &target).await?;
            println!("Generated {} images → {}", stats.total_images, path.display());
        }

        Commands::Presets => {
            for size in PageSize::ALL {
                println!("  {:<8} {}", size.key(), size.label());
            }
        }
    }

    Ok(())
}

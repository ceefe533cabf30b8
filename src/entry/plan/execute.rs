use crate::app::{run_export, run_playback, run_watch};
use crate::error::AppResult;
use crate::system::banner;

use super::types::RunPlan;

pub(crate) async fn execute_plan(plan: RunPlan) -> AppResult<()> {
    match plan {
        RunPlan::Playback(args) => {
            banner::print_cli_banner(args.no_color);
            println!();
            run_playback(&args).await
        }
        RunPlan::Export(args) => {
            banner::print_cli_banner(args.no_color);
            println!();
            run_export(&args).await
        }
        RunPlan::Watch(watch) => {
            banner::print_cli_banner(watch.args.no_color);
            println!();
            run_watch(&watch.args).await
        }
    }
}

use clap::{Args, Subcommand};

mod sign;
mod verify;

#[derive(Debug, Args)]
pub(crate) struct PaymentsCommand {
    #[command(subcommand)]
    command: PaymentsSubcommand,
}

#[derive(Debug, Subcommand)]
enum PaymentsSubcommand {
    /// Print the signature the gateway would send for an order and payment
    Sign(sign::SignPaymentArgs),

    /// Check a payment signature against the gateway secret
    Verify(verify::VerifyPaymentArgs),
}

pub(crate) async fn run(command: PaymentsCommand) -> Result<(), String> {
    match command.command {
        PaymentsSubcommand::Sign(args) => sign::run(args).await,
        PaymentsSubcommand::Verify(args) => verify::run(args).await,
    }
}

use clap::Args;
use printshop::verification::sign;
use printshop_app::secrets::{OpenBaoArgs, OpenBaoConfig, OpenBaoSecretStore, SecretStore};

#[derive(Debug, Args)]
pub(crate) struct SignPaymentArgs {
    /// Gateway order id
    #[arg(long)]
    order_id: String,

    /// Gateway payment id
    #[arg(long)]
    payment_id: String,

    #[command(flatten)]
    openbao: OpenBaoArgs,
}

pub(crate) async fn run(args: SignPaymentArgs) -> Result<(), String> {
    let secret = OpenBaoSecretStore::new(OpenBaoConfig::from(&args.openbao))
        .gateway_secret()
        .await
        .map_err(|error| format!("failed to read gateway secret: {error}"))?;

    let signature = sign(&args.order_id, &args.payment_id, &secret)
        .map_err(|error| format!("failed to sign payment: {error}"))?;

    println!("{signature}");

    Ok(())
}

use std::sync::Arc;

use clap::Args;
use printshop_app::{
    domain::payments::{
        GatewayPaymentsService, PaymentsService,
        models::{CustomerDetails, PaymentCallback},
    },
    secrets::{OpenBaoArgs, OpenBaoConfig, OpenBaoSecretStore},
};

#[derive(Debug, Args)]
pub(crate) struct VerifyPaymentArgs {
    /// Gateway order id
    #[arg(long)]
    order_id: String,

    /// Gateway payment id
    #[arg(long)]
    payment_id: String,

    /// Hex signature sent with the payment callback
    #[arg(long)]
    signature: String,

    #[command(flatten)]
    openbao: OpenBaoArgs,
}

pub(crate) async fn run(args: VerifyPaymentArgs) -> Result<(), String> {
    let secrets = OpenBaoSecretStore::new(OpenBaoConfig::from(&args.openbao));
    let service = GatewayPaymentsService::new(Arc::new(secrets));

    let outcome = service
        .verify_payment(PaymentCallback {
            order_id: args.order_id,
            payment_id: args.payment_id,
            signature: args.signature,
            customer_details: CustomerDetails::new(),
        })
        .await
        .map_err(|error| format!("failed to verify payment: {error}"))?;

    println!("order_id: {}", outcome.order_id);
    println!("payment_id: {}", outcome.payment_id);
    println!("status: {}", outcome.status.as_str());

    if outcome.authentic {
        Ok(())
    } else {
        Err("signature does not match".to_string())
    }
}

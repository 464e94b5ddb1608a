use seed_vault::{
    entropy_from_mnemonic, to_numeric_array, validate_mnemonic, Mnemonic, MnemonicStrength,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("SeedVault Mnemonic Demo");
    println!("=======================");

    let mnemonic = Mnemonic::generate(MnemonicStrength::Words12)?;
    let phrase = mnemonic.phrase();

    println!("\n⚠️  IMPORTANT: Write down your mnemonic phrase and store it securely!");
    println!("Mnemonic:  {}", phrase);
    println!("Words:     {}", mnemonic.word_count());
    println!("Valid:     {}", validate_mnemonic(&phrase));

    let entropy = entropy_from_mnemonic(&phrase)?;
    println!("Entropy:   {}", hex::encode(&entropy));

    let seed = mnemonic.to_seed("");
    println!("\nDerived 64-byte seed (empty passphrase):");
    println!("{}", hex::encode(seed.as_bytes()));

    let seed_with_passphrase = mnemonic.to_seed("correct horse battery staple");
    println!("\nSame phrase, different passphrase, different seed:");
    println!("{}", hex::encode(seed_with_passphrase.as_bytes()));

    // What a host without native byte buffers receives across the bridge.
    let bridge_form = to_numeric_array(&seed.as_bytes()[..8]);
    println!("\nFirst seed bytes as a host numeric array: {:?}", bridge_form);

    Ok(())
}

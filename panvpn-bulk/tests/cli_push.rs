use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

const HEADER: &str = "tunnel_if_name,tunnel_if_comment,tunnel_if_ip,mgmt_profile,virtual_router,zone,ike_gw_name,ike_interface,ike_local_ip,peer_ip_type,peer_ip_value,psk,local_id,peer_id,passive_mode,nat_traversal,ikev1_exchange_mode,ikev1_crypto_profile,fragmentation,dpd,ipsec_tunnel_name,tunnel_interface_ref,ike_gw_ref,ipsec_crypto_profile";

const ROW: &str = "tunnel.1,site a,10.0.0.1/30,,default,vpn,gw-a,ethernet1/1,192.0.2.1,ip,198.51.100.10,secret,,,false,true,main,ike-prof,false,true,tun-a,tunnel.1,gw-a,";

fn write_csv(dir: &Path, rows: &[&str]) -> PathBuf {
    let path = dir.join("vpn.csv");
    let mut text = String::from(HEADER);
    for row in rows {
        text.push('\n');
        text.push_str(row);
    }
    text.push('\n');
    fs::write(&path, text).expect("write csv");
    path
}

#[test]
fn push_fails_when_device_is_unreachable() {
    let dir = tempdir().expect("tempdir");
    let input = write_csv(dir.path(), &[ROW]);

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("panvpn-bulk"));
    cmd.arg("push")
        .arg(&input)
        .arg("--device")
        .arg("127.0.0.1:1")
        .arg("--username")
        .arg("admin")
        .arg("--password")
        .arg("admin")
        .arg("--quiet")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "failed to open API session on 127.0.0.1:1",
        ));
}

#[test]
fn push_validates_rows_before_connecting() {
    let broken = ROW.replace(",vpn,", ",,");
    let dir = tempdir().expect("tempdir");
    let input = write_csv(dir.path(), &[&broken]);

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("panvpn-bulk"));
    cmd.arg("push")
        .arg(&input)
        .arg("--device")
        .arg("device-that-is-never-contacted.invalid")
        .arg("--username")
        .arg("admin")
        .arg("--password")
        .arg("admin")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "missing required value for column 'zone'",
        ));
}

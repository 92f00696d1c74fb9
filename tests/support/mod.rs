//! Shared fixtures for the integration tests: a full summary dump built
//! programmatically from the real delimiters, plus API response bodies.

#![allow(dead_code)]

use jsshealth::report::ReportNode;
use jsshealth::summary::structured::{ROW_RULE, SECTION_RULE};

/// Builds a summary blob with every section the extractors read, shaped
/// the way a live console prints it: dot leaders, labeled category
/// sections, and the data section following each label.
pub fn summary_blob() -> String {
    let environment = {
        let mut rows = vec![
            "Environment Information".to_string(),
            "Reported On\t2026/08/30".to_string(),
            "Host\tOperating System .............. Mac OS X 10.10.5".to_string(),
            "Install\tWeb App Installed To .......... /usr/local/jss/tomcat/webapps".to_string(),
            "JVM\tJava Version .................. 1.8.0_252\tx\tJava Vendor ................... Oracle Corporation"
                .to_string(),
            "a\tb\tc\td\te\tf\tDatabase Size ................. 7.2 GB".to_string(),
            "x".to_string(),
            "x".to_string(),
            "x".to_string(),
        ];
        let mut mysql_cells: Vec<String> = (0..20).map(|_| "x".to_string()).collect();
        mysql_cells.push("version ....................... 5.6.20".to_string());
        rows.push(mysql_cells.join("\t"));
        rows
    };

    let table_sizes = {
        let mut cells = vec![
            "logs 2.0 GB".to_string(),
            "events 800.0 MB".to_string(),
            "history 500.0 KB".to_string(),
        ];
        // The console ends the row in non-table tokens.
        cells.extend((0..11).map(|_| "x".to_string()));
        cells.join("\t")
    };

    let sections: Vec<String> = vec![
        "JSS Summary".to_string(),
        environment.join(ROW_RULE),
        "Password Policy".to_string(),
        [
            "Settings",
            "x\tRequire Uppercase ............. true\tRequire Lowercase ............. true\
             \tRequire Number ................ false\tRequire Special Characters .... false",
        ]
        .join(ROW_RULE),
        "Clustering".to_string(),
        "x\tClustering Enabled ............ false".to_string(),
        "Activation Code".to_string(),
        ["x", "x\tx\tx\tx\tExpires ....................... 2099/01/01"].join(ROW_RULE),
        "Change Management".to_string(),
        "x\tUse Log File .................. true\tLocation of Log File .......... /var/log/jamfChangeManagement.log"
            .to_string(),
        "Apache Tomcat Settings".to_string(),
        "x\tx\tSSL Cert Issuer ............... Acme Root CA\tSSL Cert Expires .............. 2099/03/15"
            .to_string(),
        "Log Flushing".to_string(),
        ["x", "x\tTime to Flush Logs Each Day ... 12:00AM"].join(ROW_RULE),
        "Push Certificates".to_string(),
        "MDM Push Notification Certificate\tx\tx\tExpires ....................... 2099/05/01"
            .to_string(),
        "Push Proxy Authorization Token\tx\tx\tExpires ....................... 2099/06/01"
            .to_string(),
        "Check-In".to_string(),
        ["x", "x\tLogin/Logout Hooks ............ true"].join(ROW_RULE),
        "Table sizes".to_string(),
        table_sizes,
        "Table row counts".to_string(),
        "computers..........120 computers_denormalized..........118 mobile_devices..........60 mobile_devices_denormalized..........60"
            .to_string(),
    ];

    sections.join(SECTION_RULE)
}

pub const COMPUTERS_LIST: &str = "<computers><size>2</size>\
    <computer><id>1</id><name>lab-01</name></computer>\
    <computer><id>2</id><name>lab-02</name></computer>\
</computers>";

pub const MOBILE_DEVICES_LIST: &str = "<mobile_devices><size>0</size></mobile_devices>";

pub const USERS_LIST: &str = "<users><size>1</size>\
    <user><id>1</id><name>jdoe</name></user>\
</users>";

pub const ACTIVATION_CODE: &str = "<activation_code>\
    <organization_name>Acme District</organization_name>\
    <code>ABC-123-DEF</code>\
</activation_code>";

pub const COMPUTER_CHECKIN: &str = "<computer_check_in>\
    <check_in_frequency>15</check_in_frequency>\
    <create_startup_script>true</create_startup_script>\
</computer_check_in>";

pub const GSX_CONNECTION: &str = "<gsx_connection>\
    <enabled>false</enabled>\
    <username/><account_number/><region/><uri/>\
</gsx_connection>";

pub const PREFERENCE_PROFILES: &str =
    "<managed_preference_profiles><size>0</size></managed_preference_profiles>";

pub const LDAP_LIST: &str = "<ldap_servers><size>1</size>\
    <ldap_server><id>5</id><name>Corp AD</name></ldap_server>\
</ldap_servers>";

pub const LDAP_DETAIL: &str = "<ldap_server><connection>\
    <id>5</id><name>Corp AD</name>\
    <hostname>ad.example.com</hostname><server_type>Active Directory</server_type>\
    <port>636</port>\
</connection></ldap_server>";

pub const VPP_LIST: &str = "<vpp_accounts><size>1</size>\
    <vpp_account><id>3</id><name>District License</name></vpp_account>\
</vpp_accounts>";

pub const VPP_DETAIL: &str = "<vpp_account>\
    <id>3</id>\
    <name>District License</name>\
    <contact/><service_token/><account_name/>\
    <expiration_date>2099/04/01</expiration_date>\
</vpp_account>";

pub const COMPUTER_GROUPS_LIST: &str = "<computer_groups><size>2</size>\
    <computer_group><id>10</id><name>All Labs</name></computer_group>\
    <computer_group><id>11</id><name>Staff</name></computer_group>\
</computer_groups>";

pub const COMPUTER_GROUP_FLAGGED: &str = "<computer_group>\
    <id>10</id>\
    <name>All Labs</name>\
    <is_smart>true</is_smart>\
    <site><id>-1</id></site>\
    <criteria><size>12</size>\
        <criterion><name>Computer Group</name><value>Lab A</value></criterion>\
    </criteria>\
</computer_group>";

pub const COMPUTER_GROUP_PLAIN: &str = "<computer_group>\
    <id>11</id>\
    <name>Staff</name>\
    <is_smart>true</is_smart>\
    <site><id>-1</id></site>\
    <criteria><size>2</size>\
        <criterion><name>Application Title</name><value>Office</value></criterion>\
    </criteria>\
</computer_group>";

pub const EMPTY_MOBILE_GROUPS: &str =
    "<mobile_device_groups><size>0</size></mobile_device_groups>";

pub const EMPTY_USER_GROUPS: &str = "<user_groups><size>0</size></user_groups>";

pub const PRINTERS_LIST: &str = "<printers><size>1</size>\
    <printer><id>7</id><name>Lab Printer</name></printer>\
</printers>";

pub const PRINTER_DETAIL: &str = "<printer>\
    <id>7</id><name>Lab Printer</name><category>None</category>\
    <uri>lpd://10.0.0.9</uri><CUPS_name>lab</CUPS_name><location>Lab</location>\
    <model>Xerox WorkCentre 7845</model>\
</printer>";

pub const SCRIPTS_LIST: &str = "<scripts><size>1</size>\
    <script><id>4</id><name>Cleanup</name></script>\
</scripts>";

pub const SCRIPT_DETAIL: &str = "<script>\
    <id>4</id><name>Cleanup</name><category>Maintenance</category>\
    <filename>cleanup.sh</filename><info/><notes/><priority>After</priority>\
    <parameters/><os_requirements/>\
    <script_contents>#!/bin/sh\nrm -rf /tmp/cache</script_contents>\
</script>";

pub const POLICIES_LIST: &str = "<policies><size>1</size>\
    <policy><id>21</id><name>Inventory Update</name></policy>\
</policies>";

pub const POLICY_DETAIL: &str = "<policy>\
    <general>\
        <id>21</id>\
        <name>Inventory Update</name>\
        <enabled>true</enabled>\
        <trigger>EVENT</trigger>\
        <trigger_checkin>true</trigger_checkin>\
        <trigger_enrollment_complete>false</trigger_enrollment_complete>\
        <trigger_login>false</trigger_login>\
        <trigger_logout>false</trigger_logout>\
        <trigger_network_state_changed>false</trigger_network_state_changed>\
        <trigger_startup>false</trigger_startup>\
        <trigger_other/>\
        <frequency>Ongoing</frequency>\
    </general>\
    <scope/><self_service/><package_configuration/><scripts/><printers/>\
    <dock_items/><account_maintenance/><reboot/>\
    <maintenance><recon>true</recon></maintenance>\
</policy>";

pub const EXTENSION_ATTRIBUTES: &str =
    "<computer_extension_attributes><size>0</size></computer_extension_attributes>";

pub const MOBILE_EXTENSION_ATTRIBUTES: &str =
    "<mobile_device_extension_attributes><size>0</size></mobile_device_extension_attributes>";

pub const COMPUTER_CONFIGURATIONS: &str =
    "<computer_configurations><size>0</size></computer_configurations>";

pub const SMTP_SERVER: &str = "<smtp_server>\
    <enabled>true</enabled>\
    <host>smtp.example.com</host>\
    <port>587</port>\
    <timeout>5</timeout>\
    <authorization_required>false</authorization_required>\
    <username/><password/>\
    <ssl>false</ssl><tls>true</tls>\
    <send_from_name>JSS</send_from_name>\
    <send_from_email>jss@example.com</send_from_email>\
</smtp_server>";

/// Walks a report tree by child names.
pub fn node_at<'a>(tree: &'a ReportNode, path: &[&str]) -> Option<&'a ReportNode> {
    let mut node = tree;
    for name in path {
        node = node.get(name)?;
    }
    Some(node)
}

/// Leaf value at a path, as a JSON value.
pub fn leaf_at(tree: &ReportNode, path: &[&str]) -> Option<serde_json::Value> {
    node_at(tree, path).and_then(|n| n.as_leaf()).cloned()
}

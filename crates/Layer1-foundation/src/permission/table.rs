//! 내장 권한 분류 테이블
//!
//! AOSP 기준 보호 수준. 프로세스 시작 후 한 번만 인덱싱된다.

use super::types::Category::{self, Dangerous, Normal, Signature};
use std::collections::HashMap;
use std::sync::OnceLock;

/// 내장 테이블 항목: (이름, 보호 수준, 그룹)
pub type BuiltinEntry = (&'static str, Category, &'static str);

/// 내장 분류 테이블
pub static BUILTIN_PERMISSIONS: &[BuiltinEntry] = &[
    // ------------------------------------------------------------------------
    // normal
    // ------------------------------------------------------------------------
    ("android.permission.INTERNET", Normal, "NETWORK"),
    ("android.permission.ACCESS_NETWORK_STATE", Normal, "NETWORK"),
    ("android.permission.CHANGE_NETWORK_STATE", Normal, "NETWORK"),
    ("android.permission.ACCESS_WIFI_STATE", Normal, "NETWORK"),
    ("android.permission.CHANGE_WIFI_STATE", Normal, "NETWORK"),
    ("android.permission.BLUETOOTH", Normal, "BLUETOOTH"),
    ("android.permission.BLUETOOTH_ADMIN", Normal, "BLUETOOTH"),
    ("android.permission.NFC", Normal, "NFC"),
    ("android.permission.VIBRATE", Normal, "HARDWARE"),
    ("android.permission.FLASHLIGHT", Normal, "HARDWARE"),
    ("android.permission.WAKE_LOCK", Normal, "SYSTEM_TOOLS"),
    ("android.permission.RECEIVE_BOOT_COMPLETED", Normal, "SYSTEM_TOOLS"),
    ("android.permission.FOREGROUND_SERVICE", Normal, "SYSTEM_TOOLS"),
    ("android.permission.REQUEST_IGNORE_BATTERY_OPTIMIZATIONS", Normal, "SYSTEM_TOOLS"),
    ("android.permission.KILL_BACKGROUND_PROCESSES", Normal, "SYSTEM_TOOLS"),
    ("android.permission.EXPAND_STATUS_BAR", Normal, "SYSTEM_TOOLS"),
    ("android.permission.QUERY_ALL_PACKAGES", Normal, "SYSTEM_TOOLS"),
    ("android.permission.USE_FULL_SCREEN_INTENT", Normal, "NOTIFICATIONS"),
    ("android.permission.ACCESS_NOTIFICATION_POLICY", Normal, "NOTIFICATIONS"),
    ("android.permission.SET_WALLPAPER", Normal, "DISPLAY"),
    ("android.permission.READ_SYNC_SETTINGS", Normal, "SYNC"),
    ("android.permission.WRITE_SYNC_SETTINGS", Normal, "SYNC"),
    ("android.permission.USE_BIOMETRIC", Normal, "BIOMETRICS"),
    ("android.permission.USE_FINGERPRINT", Normal, "BIOMETRICS"),
    // ------------------------------------------------------------------------
    // dangerous (runtime)
    // ------------------------------------------------------------------------
    ("android.permission.READ_CALENDAR", Dangerous, "CALENDAR"),
    ("android.permission.WRITE_CALENDAR", Dangerous, "CALENDAR"),
    ("android.permission.READ_CALL_LOG", Dangerous, "CALL_LOG"),
    ("android.permission.WRITE_CALL_LOG", Dangerous, "CALL_LOG"),
    ("android.permission.PROCESS_OUTGOING_CALLS", Dangerous, "CALL_LOG"),
    ("android.permission.CAMERA", Dangerous, "CAMERA"),
    ("android.permission.READ_CONTACTS", Dangerous, "CONTACTS"),
    ("android.permission.WRITE_CONTACTS", Dangerous, "CONTACTS"),
    ("android.permission.GET_ACCOUNTS", Dangerous, "CONTACTS"),
    ("android.permission.ACCESS_FINE_LOCATION", Dangerous, "LOCATION"),
    ("android.permission.ACCESS_COARSE_LOCATION", Dangerous, "LOCATION"),
    ("android.permission.ACCESS_BACKGROUND_LOCATION", Dangerous, "LOCATION"),
    ("android.permission.RECORD_AUDIO", Dangerous, "MICROPHONE"),
    ("android.permission.READ_PHONE_STATE", Dangerous, "PHONE"),
    ("android.permission.READ_PHONE_NUMBERS", Dangerous, "PHONE"),
    ("android.permission.CALL_PHONE", Dangerous, "PHONE"),
    ("android.permission.ANSWER_PHONE_CALLS", Dangerous, "PHONE"),
    ("android.permission.ACCEPT_HANDOVER", Dangerous, "PHONE"),
    ("android.permission.USE_SIP", Dangerous, "PHONE"),
    ("com.android.voicemail.permission.ADD_VOICEMAIL", Dangerous, "PHONE"),
    ("android.permission.BODY_SENSORS", Dangerous, "SENSORS"),
    ("android.permission.BODY_SENSORS_BACKGROUND", Dangerous, "SENSORS"),
    ("android.permission.ACTIVITY_RECOGNITION", Dangerous, "ACTIVITY_RECOGNITION"),
    ("android.permission.SEND_SMS", Dangerous, "SMS"),
    ("android.permission.RECEIVE_SMS", Dangerous, "SMS"),
    ("android.permission.READ_SMS", Dangerous, "SMS"),
    ("android.permission.RECEIVE_WAP_PUSH", Dangerous, "SMS"),
    ("android.permission.RECEIVE_MMS", Dangerous, "SMS"),
    ("android.permission.READ_EXTERNAL_STORAGE", Dangerous, "STORAGE"),
    ("android.permission.WRITE_EXTERNAL_STORAGE", Dangerous, "STORAGE"),
    ("android.permission.ACCESS_MEDIA_LOCATION", Dangerous, "STORAGE"),
    ("android.permission.READ_MEDIA_IMAGES", Dangerous, "MEDIA"),
    ("android.permission.READ_MEDIA_VIDEO", Dangerous, "MEDIA"),
    ("android.permission.READ_MEDIA_AUDIO", Dangerous, "MEDIA"),
    ("android.permission.READ_MEDIA_VISUAL_USER_SELECTED", Dangerous, "MEDIA"),
    ("android.permission.BLUETOOTH_SCAN", Dangerous, "NEARBY_DEVICES"),
    ("android.permission.BLUETOOTH_CONNECT", Dangerous, "NEARBY_DEVICES"),
    ("android.permission.BLUETOOTH_ADVERTISE", Dangerous, "NEARBY_DEVICES"),
    ("android.permission.NEARBY_WIFI_DEVICES", Dangerous, "NEARBY_DEVICES"),
    ("android.permission.UWB_RANGING", Dangerous, "NEARBY_DEVICES"),
    ("android.permission.POST_NOTIFICATIONS", Dangerous, "NOTIFICATIONS"),
    // ------------------------------------------------------------------------
    // signature (signature|privileged|appop 포함)
    // ------------------------------------------------------------------------
    ("android.permission.INSTALL_PACKAGES", Signature, "SYSTEM"),
    ("android.permission.DELETE_PACKAGES", Signature, "SYSTEM"),
    ("android.permission.READ_LOGS", Signature, "SYSTEM"),
    ("android.permission.REBOOT", Signature, "SYSTEM"),
    ("android.permission.MOUNT_UNMOUNT_FILESYSTEMS", Signature, "SYSTEM"),
    ("android.permission.CHANGE_CONFIGURATION", Signature, "SYSTEM"),
    ("android.permission.PACKAGE_USAGE_STATS", Signature, "SYSTEM"),
    ("android.permission.REQUEST_INSTALL_PACKAGES", Signature, "SYSTEM"),
    ("android.permission.SCHEDULE_EXACT_ALARM", Signature, "SYSTEM"),
    ("android.permission.WRITE_SETTINGS", Signature, "SETTINGS"),
    ("android.permission.WRITE_SECURE_SETTINGS", Signature, "SETTINGS"),
    ("android.permission.SYSTEM_ALERT_WINDOW", Signature, "DISPLAY"),
    ("android.permission.MANAGE_EXTERNAL_STORAGE", Signature, "STORAGE"),
    ("android.permission.BIND_ACCESSIBILITY_SERVICE", Signature, "ACCESSIBILITY"),
    ("android.permission.BIND_DEVICE_ADMIN", Signature, "DEVICE_ADMIN"),
    ("android.permission.BIND_NOTIFICATION_LISTENER_SERVICE", Signature, "NOTIFICATIONS"),
    ("android.permission.BIND_VPN_SERVICE", Signature, "NETWORK"),
];

static INDEX: OnceLock<HashMap<&'static str, (Category, &'static str)>> = OnceLock::new();

/// 이름 -> (보호 수준, 그룹) 인덱스
fn index() -> &'static HashMap<&'static str, (Category, &'static str)> {
    INDEX.get_or_init(|| {
        BUILTIN_PERMISSIONS
            .iter()
            .map(|&(name, category, group)| (name, (category, group)))
            .collect()
    })
}

/// 내장 테이블 조회
pub fn lookup(name: &str) -> Option<(Category, &'static str)> {
    index().get(name).copied()
}
